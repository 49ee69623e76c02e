//! [`Query`] definition.

pub mod render_quote;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::render_quote::RenderQuote;
