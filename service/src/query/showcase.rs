//! [`Query`] collection related to the showcase banner.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::Listing,
    infra::{catalog, Catalog},
    selection, Service,
};

use super::Query;

/// Queries the most viewed [`Listing`]s to rotate on the showcase banner,
/// most viewed first.
#[derive(Clone, Copy, Debug)]
pub struct Top {
    /// Number of [`Listing`]s to select.
    pub count: usize,
}

impl<C> Query<Top> for Service<C>
where
    C: Catalog<
        Select<By<Vec<Listing>, ()>>,
        Ok = Vec<Listing>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = Vec<Listing>;
    type Err = Traced<catalog::Error>;

    async fn execute(
        &self,
        Top { count }: Top,
    ) -> Result<Self::Ok, Self::Err> {
        let all = self
            .catalog()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(selection::top_by_views(&all, count))
    }
}
