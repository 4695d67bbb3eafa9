//! Structured gradient model.
//!
//! Scope:
//! - color values as they appear in a parsed gradient (`rgb(...)` / `rgba(...)`)
//! - color stops and gradients, plus the pure edit operations on them
//!
//! Parsing and serializing gradient strings is left to the caller; this module
//! only consumes and produces the structured form.

pub mod color;
pub mod error;
pub mod gradient;

pub use color::{ColorValue, Rgba};
pub use error::GradientError;
pub use gradient::{ColorStop, Gradient, GradientKind, Length, LengthUnit};
