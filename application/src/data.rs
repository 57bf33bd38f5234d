//! Embedded demo dataset.
//!
//! Counterpart of a real listing provider: a fixed set of agencies, users
//! and listings assembled through the validating domain constructors.

use common::{money::Currency, DateTime, DateTimeOf, Money};
use rust_decimal::Decimal;
use service::{
    domain::{agency, listing, user, Agency, Listing, User},
    infra::Snapshot,
};

/// Assembles the demo [`Snapshot`] the application serves.
///
/// [`None`] is returned if the embedded dataset is inconsistent.
#[must_use]
pub fn snapshot() -> Option<Snapshot> {
    let premium = agency::Id::new();
    let horizonte = agency::Id::new();
    let litoral = agency::Id::new();

    let carlos = user::Id::new();
    let maria = user::Id::new();

    let agencies = vec![
        Agency {
            id: premium,
            name: agency::Name::new("Premium Imóveis")?,
            plan: agency::Plan::Enterprise,
            status: agency::Status::Active,
            listings_count: 4,
            agents_count: 3,
            monthly_revenue: brl(45_000),
            created_at: created_at("2023-02-01T09:00:00Z")?,
        },
        Agency {
            id: horizonte,
            name: agency::Name::new("Horizonte Imóveis")?,
            plan: agency::Plan::Professional,
            status: agency::Status::Active,
            listings_count: 2,
            agents_count: 2,
            monthly_revenue: brl(18_500),
            created_at: created_at("2023-07-19T15:30:00Z")?,
        },
        Agency {
            id: litoral,
            name: agency::Name::new("Litoral Sul Imóveis")?,
            plan: agency::Plan::Basic,
            status: agency::Status::Suspended,
            listings_count: 0,
            agents_count: 1,
            monthly_revenue: brl(0),
            created_at: created_at("2024-01-08T11:00:00Z")?,
        },
    ];

    let users = vec![
        User {
            id: user::Id::new(),
            name: user::Name::new("Fernanda Costa")?,
            role: user::Role::SaasAdmin,
            agency_id: None,
            created_at: created_at("2023-01-15T08:00:00Z")?,
        },
        User {
            id: user::Id::new(),
            name: user::Name::new("Roberto Almeida")?,
            role: user::Role::AgencyManager,
            agency_id: Some(premium),
            created_at: created_at("2023-02-01T09:10:00Z")?,
        },
        User {
            id: user::Id::new(),
            name: user::Name::new("Juliana Santos")?,
            role: user::Role::Secretary,
            agency_id: Some(premium),
            created_at: created_at("2023-02-03T10:00:00Z")?,
        },
        User {
            id: carlos,
            name: user::Name::new("Carlos Lima")?,
            role: user::Role::Agent,
            agency_id: Some(premium),
            created_at: created_at("2023-02-10T09:00:00Z")?,
        },
        User {
            id: maria,
            name: user::Name::new("Maria Silva")?,
            role: user::Role::Agent,
            agency_id: Some(horizonte),
            created_at: created_at("2023-07-20T14:00:00Z")?,
        },
    ];

    let listings = vec![
        Listing {
            id: listing::Id::new(),
            title: listing::Title::new("Apartamento de Luxo em Copacabana")?,
            kind: listing::Kind::Sale,
            status: listing::Status::Available,
            price: brl(2_500_000),
            neighborhood: listing::Neighborhood::new("Copacabana")?,
            city: listing::City::new("Rio de Janeiro")?,
            bedrooms: 4,
            bathrooms: 3,
            parking_spots: 2,
            area: 220,
            images: images(&[
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750",
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688",
            ])?,
            views: 1_243.into(),
            agent_id: carlos,
            agency_id: premium,
            created_at: created_at("2024-01-10T14:30:00Z")?,
        },
        Listing {
            id: listing::Id::new(),
            title: listing::Title::new("Casa Moderna em Alphaville")?,
            kind: listing::Kind::Sale,
            status: listing::Status::Available,
            price: brl(1_850_000),
            neighborhood: listing::Neighborhood::new("Alphaville")?,
            city: listing::City::new("Barueri")?,
            bedrooms: 5,
            bathrooms: 4,
            parking_spots: 4,
            area: 380,
            images: images(&[
                "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9",
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c",
            ])?,
            views: 987.into(),
            agent_id: carlos,
            agency_id: premium,
            created_at: created_at("2024-02-05T09:15:00Z")?,
        },
        Listing {
            id: listing::Id::new(),
            title: listing::Title::new("Cobertura Duplex nos Jardins")?,
            kind: listing::Kind::Sale,
            status: listing::Status::Pending,
            price: brl(4_200_000),
            neighborhood: listing::Neighborhood::new("Jardins")?,
            city: listing::City::new("São Paulo")?,
            bedrooms: 4,
            bathrooms: 5,
            parking_spots: 3,
            area: 310,
            images: images(&[
                "https://images.unsplash.com/photo-1567496898669-ee935f5f647a",
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c",
                "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d",
            ])?,
            views: 1_876.into(),
            agent_id: carlos,
            agency_id: premium,
            created_at: created_at("2023-11-28T16:45:00Z")?,
        },
        Listing {
            id: listing::Id::new(),
            title: listing::Title::new(
                "Apartamento Compacto na Vila Madalena",
            )?,
            kind: listing::Kind::Rent,
            status: listing::Status::Available,
            price: brl(4_500),
            neighborhood: listing::Neighborhood::new("Vila Madalena")?,
            city: listing::City::new("São Paulo")?,
            bedrooms: 2,
            bathrooms: 1,
            parking_spots: 1,
            area: 68,
            images: images(&[
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267",
            ])?,
            views: 654.into(),
            agent_id: carlos,
            agency_id: premium,
            created_at: created_at("2024-03-02T10:00:00Z")?,
        },
        Listing {
            id: listing::Id::new(),
            title: listing::Title::new("Sala Comercial na Faria Lima")?,
            kind: listing::Kind::Rent,
            status: listing::Status::Available,
            price: brl(12_000),
            neighborhood: listing::Neighborhood::new("Itaim Bibi")?,
            city: listing::City::new("São Paulo")?,
            bedrooms: 0,
            bathrooms: 2,
            parking_spots: 2,
            area: 140,
            images: images(&[
                "https://images.unsplash.com/photo-1497366216548-37526070297c",
                "https://images.unsplash.com/photo-1497366811353-6870744d04b2",
            ])?,
            views: 432.into(),
            agent_id: maria,
            agency_id: horizonte,
            created_at: created_at("2024-02-20T13:20:00Z")?,
        },
        Listing {
            id: listing::Id::new(),
            title: listing::Title::new("Casa de Praia em Jurerê")?,
            kind: listing::Kind::Sale,
            status: listing::Status::Available,
            price: brl(3_100_000),
            neighborhood: listing::Neighborhood::new("Jurerê Internacional")?,
            city: listing::City::new("Florianópolis")?,
            bedrooms: 6,
            bathrooms: 5,
            parking_spots: 4,
            area: 450,
            images: images(&[
                "https://images.unsplash.com/photo-1613490493576-7fde63acd811",
                "https://images.unsplash.com/photo-1613977257363-707ba9348227",
            ])?,
            views: 1_105.into(),
            agent_id: maria,
            agency_id: horizonte,
            created_at: created_at("2023-12-12T08:40:00Z")?,
        },
    ];

    Snapshot::new(listings, agencies, users)
}

/// Builds a [`Money`] amount of whole Brazilian Reais.
fn brl(amount: i64) -> Money {
    Money {
        amount: Decimal::new(amount, 0),
        currency: Currency::Brl,
    }
}

/// Builds [`Images`] from the provided URLs.
///
/// [`Images`]: listing::Images
fn images(urls: &[&str]) -> Option<listing::Images> {
    listing::Images::new(
        urls.iter()
            .map(|url| listing::ImageUrl::new(*url))
            .collect::<Option<Vec<_>>>()?,
    )
}

/// Parses an [RFC 3339] creation timestamp.
///
/// [RFC 3339]: https://tools.ietf.org/html/rfc3339
fn created_at<Of>(input: &str) -> Option<DateTimeOf<Of>> {
    Some(DateTime::from_rfc3339(input).ok()?.coerce())
}
