//! Service contains the business logic of the application.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod carousel;
pub mod domain;
pub mod infra;
pub mod query;
pub mod selection;
pub mod task;

use std::error::Error as StdError;

use common::operations::{By, Start};

#[cfg(doc)]
use infra::Catalog;

pub use self::{query::Query, task::Task};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// [`task::RotateShowcase`] configuration.
    pub rotate_showcase: task::rotate_showcase::Config,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<C> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Catalog`] of this [`Service`].
    catalog: C,
}

impl<C> Service<C> {
    /// Creates a new [`Service`] with the provided parameters, spawning its
    /// background [`Task`]s.
    pub fn new(config: Config, catalog: C) -> (Self, task::Background)
    where
        Self: Task<
                Start<
                    By<
                        task::RotateShowcase<Self>,
                        task::rotate_showcase::Config,
                    >,
                >,
                Ok = (),
                Err: StdError + 'static,
            > + Clone
            + 'static,
    {
        let this = Service { config, catalog };

        let mut bg = task::Background::default();
        let svc = this.clone();
        bg.spawn(async move {
            svc.execute(Start(By::new(svc.config().rotate_showcase)))
                .await
        });

        (this, bg)
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Catalog`] of this [`Service`].
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}
