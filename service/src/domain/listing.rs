//! [`Listing`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use uuid::Uuid;

use crate::domain::{agency, user};

/// Property listed on the platform for sale or rent.
#[derive(Clone, Debug)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// Transaction [`Kind`] this [`Listing`] is offered with.
    pub kind: Kind,

    /// [`Status`] of this [`Listing`].
    pub status: Status,

    /// Asking price of this [`Listing`].
    pub price: Money,

    /// [`Neighborhood`] this [`Listing`] is located.
    pub neighborhood: Neighborhood,

    /// [`City`] this [`Listing`] is located.
    pub city: City,

    /// Number of bedrooms in this [`Listing`].
    pub bedrooms: Bedrooms,

    /// Number of bathrooms in this [`Listing`].
    pub bathrooms: Bathrooms,

    /// Number of parking spots of this [`Listing`].
    pub parking_spots: ParkingSpots,

    /// Area of this [`Listing`] in square meters.
    pub area: SquareMeters,

    /// [`Images`] of this [`Listing`].
    pub images: Images,

    /// Number of [`Views`] this [`Listing`] has accumulated.
    pub views: Views,

    /// ID of the [`User`] representing this [`Listing`].
    ///
    /// [`User`]: crate::domain::User
    pub agent_id: user::Id,

    /// ID of the [`Agency`] this [`Listing`] belongs to.
    ///
    /// [`Agency`]: crate::domain::Agency
    pub agency_id: agency::Id,

    /// [`DateTime`] when this [`Listing`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Title of a [`Listing`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `title` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 512
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Neighborhood a [`Listing`] is located.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Neighborhood(String);

impl Neighborhood {
    /// Creates a new [`Neighborhood`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `neighborhood` matches the
    /// format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(neighborhood: impl Into<String>) -> Self {
        Self(neighborhood.into())
    }

    /// Creates a new [`Neighborhood`] if the given `neighborhood` is valid.
    #[must_use]
    pub fn new(neighborhood: impl Into<String>) -> Option<Self> {
        let neighborhood = neighborhood.into();
        Self::check(&neighborhood).then_some(Self(neighborhood))
    }

    /// Checks whether the given `neighborhood` is a valid [`Neighborhood`].
    fn check(neighborhood: impl AsRef<str>) -> bool {
        let neighborhood = neighborhood.as_ref();
        neighborhood.trim() == neighborhood
            && !neighborhood.is_empty()
            && neighborhood.len() <= 512
    }
}

impl FromStr for Neighborhood {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Neighborhood`")
    }
}

/// City a [`Listing`] is located.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct City(String);

impl City {
    /// Creates a new [`City`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `city` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(city: impl Into<String>) -> Self {
        Self(city.into())
    }

    /// Creates a new [`City`] if the given `city` is valid.
    #[must_use]
    pub fn new(city: impl Into<String>) -> Option<Self> {
        let city = city.into();
        Self::check(&city).then_some(Self(city))
    }

    /// Checks whether the given `city` is a valid [`City`].
    fn check(city: impl AsRef<str>) -> bool {
        let city = city.as_ref();
        city.trim() == city && !city.is_empty() && city.len() <= 512
    }
}

impl FromStr for City {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `City`")
    }
}

/// Number of bedrooms in a [`Listing`].
pub type Bedrooms = u16;

/// Number of bathrooms in a [`Listing`].
pub type Bathrooms = u16;

/// Number of parking spots of a [`Listing`].
pub type ParkingSpots = u16;

/// Area of a [`Listing`] in square meters.
pub type SquareMeters = u32;

/// URL of a [`Listing`] image.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Creates a new [`ImageUrl`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `url` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Creates a new [`ImageUrl`] if the given `url` is valid.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        Self::check(&url).then_some(Self(url))
    }

    /// Checks whether the given `url` is a valid [`ImageUrl`].
    fn check(url: impl AsRef<str>) -> bool {
        let url = url.as_ref();
        url.trim() == url && !url.is_empty() && url.len() <= 2048
    }
}

impl FromStr for ImageUrl {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `ImageUrl`")
    }
}

/// Ordered, non-empty sequence of [`ImageUrl`]s of a [`Listing`].
#[derive(AsRef, Clone, Debug, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Images(Vec<ImageUrl>);

impl Images {
    /// Creates a new [`Images`] sequence.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `urls` are not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(urls: impl Into<Vec<ImageUrl>>) -> Self {
        Self(urls.into())
    }

    /// Creates a new [`Images`] sequence if the given `urls` are not empty.
    #[must_use]
    pub fn new(urls: impl Into<Vec<ImageUrl>>) -> Option<Self> {
        let urls = urls.into();
        (!urls.is_empty()).then_some(Self(urls))
    }

    /// Returns the hero [`ImageUrl`] of this sequence.
    #[expect(clippy::missing_panics_doc, reason = "never empty")]
    #[must_use]
    pub fn hero(&self) -> &ImageUrl {
        self.0.first().expect("non-empty")
    }

    /// Returns the number of [`ImageUrl`]s in this sequence.
    ///
    /// Always greater than zero.
    #[expect(clippy::len_without_is_empty, reason = "never empty")]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Number of times a [`Listing`] has been viewed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Views(u64);

define_kind! {
    #[doc = "Transaction kind of a [`Listing`]."]
    enum Kind {
        #[doc = "Offered for sale."]
        Sale = 1,

        #[doc = "Offered for rent."]
        Rent = 2,
    }
}

define_kind! {
    #[doc = "Status of a [`Listing`]."]
    enum Status {
        #[doc = "Open for offers."]
        Available = 1,

        #[doc = "Sold to a buyer."]
        Sold = 2,

        #[doc = "Rented to a tenant."]
        Rented = 3,

        #[doc = "Deal in progress."]
        Pending = 4,
    }
}

/// [`DateTime`] when a [`Listing`] was created.
pub type CreationDateTime = DateTimeOf<(Listing, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::{ImageUrl, Images, Title};

    #[test]
    fn images_reject_empty_sequence() {
        assert!(Images::new(Vec::new()).is_none());
    }

    #[test]
    fn images_keep_order() {
        let urls = vec![
            ImageUrl::new("https://cdn.example.com/a.jpg").unwrap(),
            ImageUrl::new("https://cdn.example.com/b.jpg").unwrap(),
        ];

        let images = Images::new(urls.clone()).unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images.hero(), &urls[0]);
    }

    #[test]
    fn title_validation() {
        assert!(Title::new("Apartamento de Luxo em Copacabana").is_some());
        assert!(Title::new("").is_none());
        assert!(Title::new("  padded  ").is_none());
        assert!(Title::new("x".repeat(513)).is_none());
    }
}
