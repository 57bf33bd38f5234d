//! Background environment for running [`Task`]s.

use std::{
    error::Error,
    future::{Future, IntoFuture},
};

use futures::{future, FutureExt as _, TryFutureExt as _};
use tokio::task;

#[cfg(doc)]
use crate::Task;

/// Background environment for running [`Task`]s.
///
/// Spawned [`Task`]s make progress only while the [`Background`] itself is
/// being awaited, and the await resolves with the first [`Task`] failure.
#[derive(Debug, Default)]
pub struct Background {
    /// Local set the [`Task`]s are spawned onto.
    set: task::LocalSet,

    /// Handles of the spawned [`Task`]s.
    handles: Vec<task::JoinHandle<Result<(), Box<dyn Error + 'static>>>>,
}

impl Background {
    /// Spawns a new [`Task`] inside this [`Background`] environment.
    pub fn spawn<F, E>(&mut self, future: F)
    where
        F: Future<Output = Result<(), E>> + 'static,
        E: Error + 'static,
    {
        self.handles.push(self.set.spawn_local(
            future.map_err(|e| -> Box<dyn Error + 'static> { Box::new(e) }),
        ));
    }
}

impl IntoFuture for Background {
    type Output = Result<(), Box<dyn Error>>;
    type IntoFuture = future::LocalBoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        let Self { set, handles } = self;
        let tasks = future::try_join_all(handles.into_iter().map(|h| {
            h.map(|res| match res {
                Ok(res) => res,
                Err(e) => {
                    let e: Box<dyn Error + 'static> = Box::new(e);
                    Err(e)
                }
            })
        }));
        future::try_join(set.map(Ok), tasks)
            .map_ok(drop)
            .boxed_local()
    }
}
