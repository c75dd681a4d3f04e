//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the application keeps its files on the host: the data
//! directory for trace output and user-supplied paths with a leading `~`.

pub mod paths;

pub use paths::{data_dir, expand_tilde};
