//! Infrastructure layer.

pub mod storage;

pub use self::storage::{FileSystem, Storage};
