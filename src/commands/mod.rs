//! Command implementations for the scinstall CLI

pub mod completions;
pub mod helpers;
pub mod sync;
pub mod uninstall;
pub mod version;
