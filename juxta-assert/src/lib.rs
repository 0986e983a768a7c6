#![warn(missing_docs)]
#![forbid(unsafe_code)]
//! Failure messages that show where an actual value departs from the
//! expected one.
//!
//! Values are wrapped in [`Value`], rendered through [`StringMappers`] and
//! compared with [`juxta_diff`]. [`build_context`] produces the name/value
//! sections of a comparison; [`FailureMessage`] and [`compare_values`]
//! assemble them under a headline.
//!
//! ```
//! use juxta_assert::{ContextConfig, Value, compare_values};
//!
//! let message = compare_values(
//!     "greeting",
//!     &Value::of("Hello, world"),
//!     "must be equal to",
//!     None,
//!     &Value::of("Hello, World"),
//!     &ContextConfig::new().allow_legend(false),
//! )?;
//! let text = message.to_string();
//! assert!(text.starts_with("\"greeting\" had an unexpected value.\n\n"));
//! assert!(text.contains("diff    :"));
//! # Ok::<(), juxta_assert::ContextError>(())
//! ```

#[macro_use]
mod tracing_macros;

mod config;
mod context;
mod error;
mod mappers;
mod message;
mod section;
mod value;

pub use config::ContextConfig;
pub use context::{DIFF_LEGEND, build_context};
pub use error::ContextError;
pub use mappers::{StringMappers, quote};
pub use message::{FailureMessage, MINIMUM_LENGTH_FOR_DIFF, compare_values, quote_name};
pub use section::{MessageSection, render_sections};
pub use value::{Inspect, Value};

pub use juxta_diff::{SimplifyOptions, TerminalEncoding};
