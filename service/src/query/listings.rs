//! [`Query`] collection related to the multiple [`Listing`]s.

use common::operations::{By, Select};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::listing::Kind;
use crate::{
    domain::{listing, Listing, User},
    infra::{catalog, Catalog},
    selection, Service,
};

use super::Query;

/// Queries the [`Listing`]s visible to a viewer, optionally narrowed to a
/// transaction [`Kind`].
#[derive(Clone, Debug, Default)]
pub struct List {
    /// Transaction [`Kind`] to narrow the result to.
    ///
    /// [`None`] keeps all of them.
    pub kind: Option<listing::Kind>,

    /// [`User`] viewing the list, if authenticated.
    pub viewer: Option<User>,
}

impl<C> Query<List> for Service<C>
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
        List { kind, viewer }: List,
    ) -> Result<Self::Ok, Self::Err> {
        let all = self
            .catalog()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        let scoped = selection::visible_to(&all, viewer.as_ref());
        Ok(selection::filter_by_kind(&scoped, kind))
    }
}
