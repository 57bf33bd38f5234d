//! Platform-wide metric queries.

use common::{operations::{By, Select}, Money};
use tracerr::Traced;

use crate::{
    domain::{agency, Agency},
    infra::{catalog, Catalog},
    Service,
};

use super::Query;

/// Queries the platform-wide [`Metrics`] shown on the SaaS dashboard.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dashboard;

/// Platform-wide metrics derived from the [`Agency`] collection.
#[derive(Clone, Copy, Debug)]
pub struct Metrics {
    /// Total number of [`Agency`]s on the platform.
    pub total_agencies: usize,

    /// Number of [`agency::Status::Active`] [`Agency`]s.
    pub active_agencies: usize,

    /// Total number of [`Listing`]s managed across all [`Agency`]s.
    ///
    /// [`Listing`]: crate::domain::Listing
    pub total_listings: u64,

    /// Total number of agents working across all [`Agency`]s.
    pub total_agents: u64,

    /// Summed monthly revenue of all [`Agency`]s.
    ///
    /// [`None`] when the platform has no [`Agency`]s, or they are billed in
    /// differing currencies.
    pub monthly_revenue: Option<Money>,
}

impl<C> Query<Dashboard> for Service<C>
where
    C: Catalog<
        Select<By<Vec<Agency>, ()>>,
        Ok = Vec<Agency>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = Metrics;
    type Err = Traced<catalog::Error>;

    async fn execute(&self, _: Dashboard) -> Result<Self::Ok, Self::Err> {
        let agencies = self
            .catalog()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        let monthly_revenue =
            agencies.split_first().and_then(|(first, rest)| {
                rest.iter().try_fold(first.monthly_revenue, |sum, a| {
                    sum.checked_add(a.monthly_revenue)
                })
            });

        Ok(Metrics {
            total_agencies: agencies.len(),
            active_agencies: agencies
                .iter()
                .filter(|a| a.status == agency::Status::Active)
                .count(),
            total_listings: agencies
                .iter()
                .map(|a| u64::from(a.listings_count))
                .sum(),
            total_agents: agencies
                .iter()
                .map(|a| u64::from(a.agents_count))
                .sum(),
            monthly_revenue,
        })
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{money::Currency, DateTime, Money};
    use rust_decimal::Decimal;

    use crate::{
        domain::{agency, Agency},
        infra::Snapshot,
        task, Config, Service,
    };

    use super::{Dashboard, Query as _};

    fn service(catalog: Snapshot) -> Service<Snapshot> {
        Service {
            config: Config {
                rotate_showcase: task::rotate_showcase::Config {
                    period: Duration::from_secs(5),
                    display: 5,
                },
            },
            catalog,
        }
    }

    fn agency(
        status: agency::Status,
        listings_count: u32,
        revenue: i64,
    ) -> Agency {
        Agency {
            id: agency::Id::new(),
            name: agency::Name::new("Imobiliária Central").unwrap(),
            plan: agency::Plan::Basic,
            status,
            listings_count,
            agents_count: 4,
            monthly_revenue: Money {
                amount: Decimal::new(revenue, 0),
                currency: Currency::Brl,
            },
            created_at: DateTime::now().coerce(),
        }
    }

    #[tokio::test]
    async fn derives_platform_totals() {
        let service = service(
            Snapshot::new(
                Vec::new(),
                vec![
                    agency(agency::Status::Active, 10, 12_000),
                    agency(agency::Status::Active, 5, 8_000),
                    agency(agency::Status::Suspended, 2, 0),
                ],
                Vec::new(),
            )
            .unwrap(),
        );

        let metrics = service.execute(Dashboard).await.unwrap();

        assert_eq!(metrics.total_agencies, 3);
        assert_eq!(metrics.active_agencies, 2);
        assert_eq!(metrics.total_listings, 17);
        assert_eq!(metrics.total_agents, 12);
        assert_eq!(
            metrics.monthly_revenue,
            Some(Money {
                amount: Decimal::new(20_000, 0),
                currency: Currency::Brl,
            }),
        );
    }

    #[tokio::test]
    async fn has_no_revenue_without_agencies() {
        let service =
            service(Snapshot::new(Vec::new(), Vec::new(), Vec::new()).unwrap());

        let metrics = service.execute(Dashboard).await.unwrap();

        assert_eq!(metrics.total_agencies, 0);
        assert_eq!(metrics.monthly_revenue, None);
    }
}
