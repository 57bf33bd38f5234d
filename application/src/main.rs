use std::{future::IntoFuture as _, io, sync::OnceLock};

use application::{data, Args, Config, Service};
use common::operations::{By, Select};
use service::{
    domain::{listing, user, User},
    query, Query as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { showcase, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let snapshot = data::snapshot().ok_or_else(|| {
        log::error!("embedded demo dataset is inconsistent");
    })?;

    let display = showcase.display;
    let (service, background) = Service::new(showcase.into(), snapshot);

    preview(&service, display).await?;

    background.into_future().await.map_err(|e| {
        log::error!("background task failed: {e}");
    })
}

/// Logs the views derived from the demo dataset once at startup.
async fn preview(service: &Service, display: usize) -> Result<(), ()> {
    let top = service
        .execute(query::showcase::Top { count: display })
        .await
        .map_err(|e| {
            log::error!("failed to query the showcase banner: {e}");
        })?;
    for (num, listing) in top.iter().enumerate() {
        log::info!(
            "banner slide {}/{}: `{}` in {}, {} ({} views)",
            num + 1,
            top.len(),
            listing.title,
            listing.neighborhood,
            listing.city,
            listing.views,
        );
    }

    let for_sale = service
        .execute(query::listings::List {
            kind: Some(listing::Kind::Sale),
            viewer: None,
        })
        .await
        .map_err(|e| {
            log::error!("failed to query listings for sale: {e}");
        })?;
    let for_rent = service
        .execute(query::listings::List {
            kind: Some(listing::Kind::Rent),
            viewer: None,
        })
        .await
        .map_err(|e| {
            log::error!("failed to query listings for rent: {e}");
        })?;
    log::info!(
        "{} listings for sale, {} for rent",
        for_sale.len(),
        for_rent.len(),
    );

    let users: Vec<User> = service
        .catalog()
        .execute(Select(By::<Vec<User>, ()>::new(())))
        .await
        .map_err(|e| {
            log::error!("failed to query users: {e}");
        })?;
    if let Some(agent) = users.iter().find(|u| u.role == user::Role::Agent) {
        let represented = service
            .execute(query::listings::List {
                kind: None,
                viewer: Some(agent.clone()),
            })
            .await
            .map_err(|e| {
                log::error!("failed to query an agent's listings: {e}");
            })?;
        log::info!(
            "agent `{}` represents {} of them",
            agent.name,
            represented.len(),
        );
    }

    let metrics = service.execute(query::metrics::Dashboard).await.map_err(
        |e| {
            log::error!("failed to query dashboard metrics: {e}");
        },
    )?;
    log::info!(
        "{} agencies ({} active), {} listings, {} agents, \
         monthly revenue {}",
        metrics.total_agencies,
        metrics.active_agencies,
        metrics.total_listings,
        metrics.total_agents,
        metrics
            .monthly_revenue
            .map_or_else(|| "n/a".to_owned(), |m| m.to_string()),
    );

    Ok(())
}
