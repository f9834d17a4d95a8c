//! Pipeline module for driving generation runs into a sink.

#[cfg(feature = "async")]
mod r#async;
mod sync;

#[cfg(feature = "async")]
pub use r#async::{generate_async, generate_with_progress_async};
pub use sync::{generate, generate_with_progress};
