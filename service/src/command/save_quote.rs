//! [`Command`] for saving a [`Quote`] report.

use std::path::PathBuf;

use common::operations::Insert;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{quote::IssueDateTime, Quote},
    infra::{storage, Storage},
    report::{self, Document, FileName},
    Service,
};

use super::Command;

/// [`Command`] for saving a [`Quote`] report into the [`Storage`].
///
/// The report is rendered with the configured saving [`report::Template`].
#[derive(Clone, Copy, Debug)]
pub struct SaveQuote<'q, 'a> {
    /// Calculated [`Quote`] to save.
    pub quote: &'q Quote<'a>,

    /// [`IssueDateTime`] of the saved [`Quote`].
    pub issued_at: IssueDateTime,
}

impl<'q, 'a, S> Command<SaveQuote<'q, 'a>> for Service<S>
where
    S: Storage<
        Insert<Document>,
        Ok = PathBuf,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = PathBuf;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: SaveQuote<'q, 'a>) -> Result<Self::Ok, Self::Err> {
        let SaveQuote { quote, issued_at } = cmd;
        let config = self.config();

        let content = report::render(
            config.saved_template,
            quote,
            issued_at,
            &config.style,
        );
        let name = FileName::for_quote(
            &config.file_prefix,
            &quote.client().name,
            &report::compact_stamp(issued_at, config.style.utc_offset),
        );

        let path = self
            .storage()
            .execute(Insert(Document { name, content }))
            .map_err(tracerr::wrap!())?;

        log::info!("quote saved to `{}`", path.display());

        Ok(path)
    }
}

/// Error of [`SaveQuote`] [`Command`] execution.
pub type ExecutionError = storage::Error;
