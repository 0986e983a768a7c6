//! Conversion of values to the text that gets diffed.

use core::any::{Any, TypeId};
use core::fmt;
use std::collections::HashMap;
use std::sync::Arc;

use crate::Value;

type MapFn = Arc<dyn Fn(&dyn Any) -> Option<String> + Send + Sync>;

/// Converts values to text, by runtime type.
///
/// Strings are quoted (with inner quotes escaped), booleans, integers and
/// chars use `Display`, lists render as `[a, b]` and every other type falls
/// back to `Debug`. [`StringMappers::put`] overrides the mapping of one type.
#[derive(Clone)]
pub struct StringMappers {
    by_type: HashMap<TypeId, MapFn>,
}

impl Default for StringMappers {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! display_mappers {
    ($mappers:expr, $($ty:ty),* $(,)?) => {
        $( $mappers = $mappers.put(|value: &$ty| value.to_string()); )*
    };
}

impl StringMappers {
    /// The default mappers.
    pub fn new() -> Self {
        let mut mappers = Self::empty()
            .put(|value: &String| quote(value))
            .put(|value: &&'static str| quote(value));
        display_mappers!(
            mappers, bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
        );
        mappers
    }

    /// No mappers at all: everything renders through `Debug`.
    pub fn empty() -> Self {
        Self {
            by_type: HashMap::new(),
        }
    }

    /// Renders values of type `T` with `map`.
    pub fn put<T, F>(mut self, map: F) -> Self
    where
        T: Any,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let map: MapFn = Arc::new(move |value: &dyn Any| value.downcast_ref::<T>().map(&map));
        self.by_type.insert(TypeId::of::<T>(), map);
        self
    }

    /// Renders `value`.
    pub fn to_text(&self, value: &Value) -> String {
        match value {
            Value::Scalar(scalar) => {
                let any = scalar.as_any();
                self.by_type
                    .get(&any.type_id())
                    .and_then(|map| map(any))
                    .unwrap_or_else(|| format!("{scalar:?}"))
            }
            Value::List(items) => {
                let items: Vec<String> = items.iter().map(|item| self.to_text(item)).collect();
                format!("[{}]", items.join(", "))
            }
        }
    }
}

impl fmt::Debug for StringMappers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringMappers")
            .field("types", &self.by_type.len())
            .finish()
    }
}

/// Wraps `text` in double quotes, escaping the quotes inside it.
pub fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\\\""))
}
