//! Domain definitions.

pub mod agency;
pub mod listing;
pub mod user;

pub use self::{agency::Agency, listing::Listing, user::User};
