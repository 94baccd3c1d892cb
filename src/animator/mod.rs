// Background sort runs.
// A run sorts its own copy of the lot on the tokio runtime and hands every
// intermediate state to the UI thread through a channel, pausing between
// steps so each one stays on screen.

pub mod event;
pub mod runner;

pub use event::{RunId, SortEvent};
pub use runner::Animator;
