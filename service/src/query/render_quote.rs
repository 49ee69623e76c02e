//! [`Query`] rendering the full report of a [`Quote`].

use std::convert::Infallible;

use crate::{
    domain::{quote::IssueDateTime, Quote},
    report::{self, Template},
    Service,
};

use super::Query;

/// [`Query`] rendering a [`Quote`] with the [`Template::Full`].
#[derive(Clone, Copy, Debug)]
pub struct RenderQuote<'q, 'a> {
    /// Calculated [`Quote`] to render.
    pub quote: &'q Quote<'a>,

    /// [`IssueDateTime`] printed in the report.
    pub issued_at: IssueDateTime,
}

impl<'q, 'a, S> Query<RenderQuote<'q, 'a>> for Service<S> {
    type Ok = String;
    type Err = Infallible;

    fn execute(
        &self,
        RenderQuote { quote, issued_at }: RenderQuote<'q, 'a>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(report::render(
            Template::Full,
            quote,
            issued_at,
            &self.config().style,
        ))
    }
}
