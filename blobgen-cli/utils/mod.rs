//! Small shared utilities for CLI binaries.

pub(crate) mod bytes;
