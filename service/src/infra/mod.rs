//! Infrastructure implementations.

pub mod catalog;

pub use self::catalog::{Catalog, Snapshot};
