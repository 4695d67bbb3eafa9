//! Folio engine crate.
//!
//! Owns the data pieces shared by the editor layers: geometry, pointer input,
//! the structured gradient model and logger setup.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
