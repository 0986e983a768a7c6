//! Values being compared.

use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::hash::DefaultHasher;
use std::sync::Arc;

/// What the context generator needs to know about a compared value.
///
/// Implemented for every `T: Debug + Hash + PartialEq + Send + Sync + 'static`.
pub trait Inspect: Any + fmt::Debug + Send + Sync {
    /// The value's type name.
    fn type_name(&self) -> &'static str;

    /// A hash of the value.
    fn hash_code(&self) -> u64;

    /// Compares against another value of any type; values of different types
    /// are never equal.
    fn dyn_eq(&self, other: &dyn Inspect) -> bool;

    /// Upcast used for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T> Inspect for T
where
    T: Any + fmt::Debug + Hash + PartialEq + Send + Sync,
{
    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    fn dyn_eq(&self, other: &dyn Inspect) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A value on one side of a comparison: a scalar, or a list of values.
///
/// Cloning a value keeps its identity; two values built separately never
/// share one, even when they are equal.
#[derive(Clone)]
pub enum Value {
    /// A single value
    Scalar(Arc<dyn Inspect>),
    /// An ordered list of values
    List(Arc<[Value]>),
}

impl Value {
    /// Wraps a scalar.
    pub fn of<T: Inspect>(value: T) -> Self {
        Self::Scalar(Arc::new(value))
    }

    /// Builds a list.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::List(items.into_iter().collect())
    }

    /// Builds a list of scalars.
    pub fn list_of<T, I>(items: I) -> Self
    where
        T: Inspect,
        I: IntoIterator<Item = T>,
    {
        Self::list(items.into_iter().map(Value::of))
    }

    /// The elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(items) => Some(items.as_ref()),
        }
    }

    /// Returns true for lists.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The scalar as a `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Scalar(value) => value.as_any().downcast_ref(),
            Self::List(_) => None,
        }
    }

    /// Returns true if this is a `bool` scalar.
    pub fn is_bool(&self) -> bool {
        self.downcast_ref::<bool>().is_some()
    }

    /// The runtime type name; `"list"` for lists.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Scalar(value) => value.type_name(),
            Self::List(_) => "list",
        }
    }

    /// A hash of the value; lists hash their elements' hashes in order.
    pub fn hash_code(&self) -> u64 {
        match self {
            Self::Scalar(value) => value.hash_code(),
            Self::List(items) => {
                let mut hasher = DefaultHasher::new();
                items.len().hash(&mut hasher);
                for item in items.iter() {
                    item.hash_code().hash(&mut hasher);
                }
                hasher.finish()
            }
        }
    }

    /// The address of the shared allocation behind this value.
    pub fn identity(&self) -> usize {
        match self {
            Self::Scalar(value) => Arc::as_ptr(value) as *const () as usize,
            Self::List(items) => Arc::as_ptr(items) as *const () as usize,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a.dyn_eq(b.as_ref()),
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => fmt::Debug::fmt(value, f),
            Self::List(items) => f.debug_list().entries(items.iter()).finish(),
        }
    }
}
