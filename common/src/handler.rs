//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler of some operation.
pub trait Handler<Args = ()> {
    /// Type of the value a successful execution produces.
    type Ok;

    /// Type of the error a failed execution produces.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
