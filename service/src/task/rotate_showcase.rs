//! [`RotateShowcase`] [`Task`].

use std::{convert::Infallible, error::Error, time};

use common::operations::{By, Perform, Start};
use tracerr::Traced;
use tracing as log;

use crate::{
    carousel::{scheduler, Showcase},
    domain::Listing,
    infra::catalog,
    query, Service,
};

use super::Task;

/// Configuration for [`RotateShowcase`] [`Task`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Period between automatic slide advances.
    pub period: time::Duration,

    /// Number of [`Listing`]s rotated on the banner.
    pub display: usize,
}

/// [`Task`] rotating the showcase banner of the most viewed [`Listing`]s.
#[derive(Clone, Copy, Debug)]
pub struct RotateShowcase<S> {
    /// [`Config`] of this [`Task`].
    config: Config,

    /// [`Service`] instance.
    service: S,
}

impl<C> Task<Start<By<RotateShowcase<Self>, Config>>> for Service<C>
where
    RotateShowcase<Service<C>>:
        Task<Perform<()>, Ok = (), Err: Error> + 'static,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<RotateShowcase<Self>, Config>>,
    ) -> Result<Self::Ok, Self::Err> {
        let config = by.into_inner();
        let task = RotateShowcase {
            config,
            service: self.clone(),
        };

        _ = task.execute(Perform(())).await.map_err(|e| {
            log::error!("`task::RotateShowcase` failed: {e}");
        });

        Ok(())
    }
}

impl<C> Task<Perform<()>> for RotateShowcase<Service<C>>
where
    Service<C>: query::Query<
        query::showcase::Top,
        Ok = Vec<Listing>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        let top = self
            .service
            .execute(query::showcase::Top {
                count: self.config.display,
            })
            .await
            .map_err(tracerr::wrap!())?;

        let Some(mut showcase) = Showcase::new(
            top.len(),
            self.config.period,
            scheduler::Delay::default(),
        ) else {
            log::warn!("no `Listing`s to rotate on the showcase banner");
            return Ok(());
        };

        if let Some(first) = top.first() {
            log::info!(
                "showcasing `Listing` {} (1/{})",
                first.id,
                showcase.len(),
            );
        }

        loop {
            let Some(deadline) = showcase.scheduler().deadline() else {
                // Suspended with nothing here to resume it.
                return Ok(());
            };
            tokio::time::sleep_until(deadline).await;
            showcase.tick();

            let current = &top[showcase.current()];
            log::info!(
                "showcasing `Listing` {} ({}/{})",
                current.id,
                showcase.current() + 1,
                showcase.len(),
            );
        }
    }
}

/// Error of [`RotateShowcase`] execution.
pub type ExecutionError = Traced<catalog::Error>;
