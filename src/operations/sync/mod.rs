//! Install/update operation submodules

pub mod components;
pub mod display;
pub mod orchestrator;
pub mod skip;


pub use orchestrator::{CoreOutcome, SyncOperation, SyncOptions};
