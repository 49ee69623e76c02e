//! [`Handler`] abstractions.

/// Executable handler.
///
/// Every handler runs to completion on the calling thread: quotes are
/// assembled one at a time, so there is nothing to await.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Whenever this [`Handler`] fails to execute.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
