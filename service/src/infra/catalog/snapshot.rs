//! In-memory [`Catalog`] of pre-validated collections.

use std::collections::HashSet;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::domain::{Agency, Listing, User};

use super::{Catalog, Error};

/// In-memory [`Catalog`] serving collections validated on construction.
///
/// Counterpart of a remote listing provider for demo and test runs: the
/// whole dataset is supplied up-front and served by cloning, so every
/// [`Select`] observes the same immutable snapshot.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    /// [`Listing`]s of this [`Snapshot`].
    listings: Vec<Listing>,

    /// [`Agency`]s of this [`Snapshot`].
    agencies: Vec<Agency>,

    /// [`User`]s of this [`Snapshot`].
    users: Vec<User>,
}

impl Snapshot {
    /// Creates a new [`Snapshot`] of the provided collections.
    ///
    /// [`None`] is returned if any collection contains duplicate ids, or a
    /// [`Listing`] references an [`Agency`] or agent missing from the
    /// snapshot: handing out such a dataset would violate what every
    /// consumer of a [`Catalog`] is entitled to assume.
    #[must_use]
    pub fn new(
        listings: Vec<Listing>,
        agencies: Vec<Agency>,
        users: Vec<User>,
    ) -> Option<Self> {
        let listing_ids: HashSet<_> = listings.iter().map(|l| l.id).collect();
        let agency_ids: HashSet<_> = agencies.iter().map(|a| a.id).collect();
        let user_ids: HashSet<_> = users.iter().map(|u| u.id).collect();

        (listing_ids.len() == listings.len()
            && agency_ids.len() == agencies.len()
            && user_ids.len() == users.len()
            && listings.iter().all(|l| {
                agency_ids.contains(&l.agency_id)
                    && user_ids.contains(&l.agent_id)
            }))
        .then_some(Self {
            listings,
            agencies,
            users,
        })
    }
}

impl Catalog<Select<By<Vec<Listing>, ()>>> for Snapshot {
    type Ok = Vec<Listing>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Listing>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.listings.clone())
    }
}

impl Catalog<Select<By<Vec<Agency>, ()>>> for Snapshot {
    type Ok = Vec<Agency>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Agency>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.agencies.clone())
    }
}

impl Catalog<Select<By<Vec<User>, ()>>> for Snapshot {
    type Ok = Vec<User>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<User>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.users.clone())
    }
}

#[cfg(test)]
mod spec {
    use common::{money::Currency, DateTime, Money};
    use rust_decimal::Decimal;

    use crate::domain::{agency, listing, user, Agency, Listing, User};

    use super::Snapshot;

    fn agency(id: agency::Id) -> Agency {
        Agency {
            id,
            name: agency::Name::new("Premium Imóveis").unwrap(),
            plan: agency::Plan::Professional,
            status: agency::Status::Active,
            listings_count: 1,
            agents_count: 1,
            monthly_revenue: Money {
                amount: Decimal::new(12_000, 0),
                currency: Currency::Brl,
            },
            created_at: DateTime::now().coerce(),
        }
    }

    fn user(id: user::Id, agency_id: agency::Id) -> User {
        User {
            id,
            name: user::Name::new("Carlos Lima").unwrap(),
            role: user::Role::Agent,
            agency_id: Some(agency_id),
            created_at: DateTime::now().coerce(),
        }
    }

    fn listing(
        id: listing::Id,
        agency_id: agency::Id,
        agent_id: user::Id,
    ) -> Listing {
        Listing {
            id,
            title: listing::Title::new("Casa em Alphaville").unwrap(),
            kind: listing::Kind::Sale,
            status: listing::Status::Available,
            price: Money {
                amount: Decimal::new(1_500_000, 0),
                currency: Currency::Brl,
            },
            neighborhood: listing::Neighborhood::new("Alphaville").unwrap(),
            city: listing::City::new("Barueri").unwrap(),
            bedrooms: 4,
            bathrooms: 3,
            parking_spots: 2,
            area: 320,
            images: listing::Images::new(vec![listing::ImageUrl::new(
                "https://cdn.example.com/1.jpg",
            )
            .unwrap()])
            .unwrap(),
            views: 7.into(),
            agent_id,
            agency_id,
            created_at: DateTime::now().coerce(),
        }
    }

    #[test]
    fn accepts_consistent_collections() {
        let agency_id = agency::Id::new();
        let agent_id = user::Id::new();

        let snapshot = Snapshot::new(
            vec![listing(listing::Id::new(), agency_id, agent_id)],
            vec![agency(agency_id)],
            vec![user(agent_id, agency_id)],
        );

        assert!(snapshot.is_some());
    }

    #[test]
    fn rejects_duplicate_listing_ids() {
        let agency_id = agency::Id::new();
        let agent_id = user::Id::new();
        let id = listing::Id::new();

        let snapshot = Snapshot::new(
            vec![
                listing(id, agency_id, agent_id),
                listing(id, agency_id, agent_id),
            ],
            vec![agency(agency_id)],
            vec![user(agent_id, agency_id)],
        );

        assert!(snapshot.is_none());
    }

    #[test]
    fn rejects_dangling_agency_reference() {
        let agent_id = user::Id::new();
        let known = agency::Id::new();

        let snapshot = Snapshot::new(
            vec![listing(listing::Id::new(), agency::Id::new(), agent_id)],
            vec![agency(known)],
            vec![user(agent_id, known)],
        );

        assert!(snapshot.is_none());
    }
}
