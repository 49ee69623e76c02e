//! [`Error`]-related definitions.

use derive_more::{Display, Error as StdError, From};
use service::command::{create_property, save_quote};
use tracerr::Traced;

use crate::prompt;

/// Error ending a quoting [`Session`] without a saved quote.
///
/// [`Session`]: crate::Session
#[derive(Debug, Display, StdError, From)]
pub enum Error {
    /// Data entry failed.
    #[display("data entry failed: {_0}")]
    Prompt(prompt::Error),

    /// Chosen property kind doesn't exist.
    #[display("`{_0}` is not a property kind")]
    #[from(ignore)]
    InvalidPropertyKind(#[error(not(source))] String),

    /// Entered property data is inconsistent.
    #[display("failed to create property: {_0}")]
    CreateProperty(Traced<create_property::ExecutionError>),

    /// Quote report couldn't be saved.
    #[display("failed to save quote: {_0}")]
    SaveQuote(Traced<save_quote::ExecutionError>),
}
