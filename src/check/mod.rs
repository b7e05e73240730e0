//! Component checks of an optimality certificate
//!
//! Each check is a pure function of borrowed inputs.
//! Structural errors are returned as `Err`; semantic failures as `Ok(false)`
//! or a non-empty list of [`Violation`]s.

mod tolerance;
mod violation;
mod feasibility;
mod gap;
mod psd;

pub(crate) use tolerance::*;
pub use violation::*;
pub use feasibility::*;
pub use gap::*;
pub use psd::*;
