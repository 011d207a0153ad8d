//! Domain models for scinstall
//!
//! Validated value types for the parts of an install request that have rules:
//! the branch, the build date and the runtime selection. Parsing one of these
//! is the only way to get it, so anything holding one has passed validation.

pub mod branch;
pub mod build_date;
pub mod runtime;

pub use branch::{Branch, Channel};
pub use build_date::BuildDate;
pub use runtime::Runtime;
