//! Pure derivations over [`Listing`] collections.
//!
//! Every function here is a pure function of its inputs: collections are
//! never mutated, and equal inputs produce equal outputs. Derived views are
//! recomputed from the source collection on every call instead of being
//! cached, so they cannot go stale.

use crate::domain::{listing, user, Listing, User};

/// Returns the `count` [`Listing`]s with the most views, most viewed first.
///
/// The sort is stable: [`Listing`]s with equal views keep their original
/// collection order. For a `count` exceeding the collection size the whole
/// collection is returned.
#[must_use]
pub fn top_by_views(listings: &[Listing], count: usize) -> Vec<Listing> {
    let mut top = listings.to_vec();
    top.sort_by(|a, b| b.views.cmp(&a.views));
    top.truncate(count);
    top
}

/// Returns the [`Listing`]s offered with the given transaction [`Kind`],
/// preserving their relative order.
///
/// [`None`] selects the whole collection, unfiltered.
///
/// [`Kind`]: listing::Kind
#[must_use]
pub fn filter_by_kind(
    listings: &[Listing],
    kind: Option<listing::Kind>,
) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| kind.map_or(true, |k| l.kind == k))
        .cloned()
        .collect()
}

/// Returns the [`Listing`]s the given `viewer` is allowed to see, preserving
/// their relative order.
///
/// Anonymous visitors browse the public site and see the whole collection,
/// as does a [`user::Role::SaasAdmin`]. An [`user::Role::AgencyManager`] and
/// a [`user::Role::Secretary`] see the [`Listing`]s of their own agency, and
/// a [`user::Role::Agent`] only the ones they personally represent.
#[must_use]
pub fn visible_to(
    listings: &[Listing],
    viewer: Option<&User>,
) -> Vec<Listing> {
    let Some(viewer) = viewer else {
        return listings.to_vec();
    };

    match viewer.role {
        user::Role::SaasAdmin => listings.to_vec(),
        user::Role::AgencyManager | user::Role::Secretary => listings
            .iter()
            .filter(|l| Some(l.agency_id) == viewer.agency_id)
            .cloned()
            .collect(),
        user::Role::Agent => listings
            .iter()
            .filter(|l| l.agent_id == viewer.id)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod spec {
    use common::{money::Currency, DateTime, Money};
    use rust_decimal::Decimal;

    use crate::domain::{agency, listing, user, Listing, User};

    use super::{filter_by_kind, top_by_views, visible_to};

    fn listing(
        views: u64,
        kind: listing::Kind,
        agency_id: agency::Id,
        agent_id: user::Id,
    ) -> Listing {
        Listing {
            id: listing::Id::new(),
            title: listing::Title::new("Apartamento Vista Mar").unwrap(),
            kind,
            status: listing::Status::Available,
            price: Money {
                amount: Decimal::new(850_000, 0),
                currency: Currency::Brl,
            },
            neighborhood: listing::Neighborhood::new("Copacabana").unwrap(),
            city: listing::City::new("Rio de Janeiro").unwrap(),
            bedrooms: 3,
            bathrooms: 2,
            parking_spots: 1,
            area: 120,
            images: listing::Images::new(vec![listing::ImageUrl::new(
                "https://cdn.example.com/1.jpg",
            )
            .unwrap()])
            .unwrap(),
            views: views.into(),
            agent_id,
            agency_id,
            created_at: DateTime::now().coerce(),
        }
    }

    fn user(role: user::Role, agency_id: Option<agency::Id>) -> User {
        User {
            id: user::Id::new(),
            name: user::Name::new("Ana Souza").unwrap(),
            role,
            agency_id,
            created_at: DateTime::now().coerce(),
        }
    }

    #[test]
    fn top_by_views_sorts_descending_with_stable_ties() {
        let agency = agency::Id::new();
        let agent = user::Id::new();
        let listings = vec![
            listing(10, listing::Kind::Sale, agency, agent),
            listing(50, listing::Kind::Rent, agency, agent),
            listing(30, listing::Kind::Sale, agency, agent),
            listing(30, listing::Kind::Rent, agency, agent),
        ];

        let top = top_by_views(&listings, 3);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0].id, listings[1].id);
        assert_eq!(top[1].id, listings[2].id);
        assert_eq!(top[2].id, listings[3].id);
    }

    #[test]
    fn top_by_views_copies_everything_on_large_count() {
        let agency = agency::Id::new();
        let agent = user::Id::new();
        let listings = vec![
            listing(10, listing::Kind::Sale, agency, agent),
            listing(50, listing::Kind::Rent, agency, agent),
            listing(30, listing::Kind::Sale, agency, agent),
        ];

        let top = top_by_views(&listings, 10);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0].id, listings[1].id);
        assert_eq!(top[1].id, listings[2].id);
        assert_eq!(top[2].id, listings[0].id);
        // Source collection is untouched.
        assert_eq!(u64::from(listings[0].views), 10);
    }

    #[test]
    fn top_two_of_the_reference_collection() {
        let agency = agency::Id::new();
        let agent = user::Id::new();
        let a = listing(10, listing::Kind::Sale, agency, agent);
        let b = listing(50, listing::Kind::Rent, agency, agent);
        let c = listing(30, listing::Kind::Sale, agency, agent);
        let listings = vec![a.clone(), b.clone(), c.clone()];

        let top = top_by_views(&listings, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, b.id);
        assert_eq!(top[1].id, c.id);

        let for_sale = filter_by_kind(&listings, Some(listing::Kind::Sale));
        assert_eq!(for_sale.len(), 2);
        assert_eq!(for_sale[0].id, a.id);
        assert_eq!(for_sale[1].id, c.id);
    }

    #[test]
    fn filter_by_kind_partitions_the_collection() {
        let agency = agency::Id::new();
        let agent = user::Id::new();
        let listings = vec![
            listing(1, listing::Kind::Sale, agency, agent),
            listing(2, listing::Kind::Rent, agency, agent),
            listing(3, listing::Kind::Sale, agency, agent),
            listing(4, listing::Kind::Rent, agency, agent),
        ];

        let sale = filter_by_kind(&listings, Some(listing::Kind::Sale));
        let rent = filter_by_kind(&listings, Some(listing::Kind::Rent));

        assert_eq!(sale.len() + rent.len(), listings.len());
        assert!(sale.iter().all(|l| l.kind == listing::Kind::Sale));
        assert!(rent.iter().all(|l| l.kind == listing::Kind::Rent));
        assert!(sale.iter().all(|s| rent.iter().all(|r| r.id != s.id)));
    }

    #[test]
    fn filter_by_kind_without_kind_keeps_everything() {
        let agency = agency::Id::new();
        let agent = user::Id::new();
        let listings = vec![
            listing(1, listing::Kind::Sale, agency, agent),
            listing(2, listing::Kind::Rent, agency, agent),
        ];

        let all = filter_by_kind(&listings, None);

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, listings[0].id);
        assert_eq!(all[1].id, listings[1].id);
    }

    #[test]
    fn filtering_is_idempotent() {
        let agency = agency::Id::new();
        let agent = user::Id::new();
        let listings = vec![
            listing(1, listing::Kind::Sale, agency, agent),
            listing(2, listing::Kind::Rent, agency, agent),
        ];

        let once = filter_by_kind(&listings, Some(listing::Kind::Rent));
        let twice = filter_by_kind(&once, Some(listing::Kind::Rent));

        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(&twice).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn visible_to_scopes_by_role() {
        let ours = agency::Id::new();
        let theirs = agency::Id::new();
        let manager = user(user::Role::AgencyManager, Some(ours));
        let agent = user(user::Role::Agent, Some(ours));
        let admin = user(user::Role::SaasAdmin, None);

        let listings = vec![
            listing(1, listing::Kind::Sale, ours, agent.id),
            listing(2, listing::Kind::Rent, ours, user::Id::new()),
            listing(3, listing::Kind::Sale, theirs, user::Id::new()),
        ];

        assert_eq!(visible_to(&listings, None).len(), 3);
        assert_eq!(visible_to(&listings, Some(&admin)).len(), 3);

        let managed = visible_to(&listings, Some(&manager));
        assert_eq!(managed.len(), 2);
        assert!(managed.iter().all(|l| l.agency_id == ours));

        let represented = visible_to(&listings, Some(&agent));
        assert_eq!(represented.len(), 1);
        assert_eq!(represented[0].agent_id, agent.id);
    }
}
