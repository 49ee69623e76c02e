//! [`Storage`]-related implementations.

pub mod file_system;

use std::io;

use derive_more::{Display, Error as StdError, From};

pub use self::file_system::FileSystem;

/// Storage operation.
pub use common::Handler as Storage;

/// [`Storage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// I/O operation failed.
    #[display("I/O failed: {_0}")]
    Io(io::Error),
}
