//! [`Agency`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use uuid::Uuid;

/// Real-estate agency subscribed to the platform.
#[derive(Clone, Debug)]
pub struct Agency {
    /// ID of this [`Agency`].
    pub id: Id,

    /// [`Name`] of this [`Agency`].
    pub name: Name,

    /// Billing [`Plan`] of this [`Agency`].
    pub plan: Plan,

    /// [`Status`] of this [`Agency`].
    pub status: Status,

    /// Number of [`Listing`]s this [`Agency`] manages.
    ///
    /// [`Listing`]: crate::domain::Listing
    pub listings_count: ListingsCount,

    /// Number of agents working for this [`Agency`].
    pub agents_count: AgentsCount,

    /// Monthly revenue of this [`Agency`].
    pub monthly_revenue: Money,

    /// [`DateTime`] when this [`Agency`] was created.
    pub created_at: CreationDateTime,
}

/// ID of an [`Agency`].
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

/// Name of an [`Agency`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Number of [`Listing`]s an [`Agency`] manages.
///
/// [`Listing`]: crate::domain::Listing
pub type ListingsCount = u32;

/// Number of agents working for an [`Agency`].
pub type AgentsCount = u32;

define_kind! {
    #[doc = "Billing plan of an [`Agency`]."]
    enum Plan {
        #[doc = "Entry-level plan."]
        Basic = 1,

        #[doc = "Mid-tier plan."]
        Professional = 2,

        #[doc = "Top-tier plan."]
        Enterprise = 3,
    }
}

define_kind! {
    #[doc = "Status of an [`Agency`]."]
    enum Status {
        #[doc = "Operating normally."]
        Active = 1,

        #[doc = "Deactivated by its owner."]
        Inactive = 2,

        #[doc = "Suspended by the platform."]
        Suspended = 3,
    }
}

/// [`DateTime`] when an [`Agency`] was created.
pub type CreationDateTime = DateTimeOf<(Agency, unit::Creation)>;
