//! [`Catalog`]-related implementations.

mod snapshot;

use derive_more::{Display, Error as StdError};

pub use self::snapshot::Snapshot;

/// Source of the platform collections.
///
/// The core never re-validates what a [`Catalog`] serves: a [`Catalog`]
/// implementation owns the validity of its collections (unique ids,
/// non-empty image sequences) and guarantees it on construction.
pub use common::Handler as Catalog;

/// [`Catalog`] error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// [`Catalog`] source cannot be reached.
    #[display("catalog source is unavailable")]
    Unavailable,
}
