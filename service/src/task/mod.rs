//! Background [`Task`]s definitions.

mod background;
pub mod rotate_showcase;

pub use common::Handler as Task;

pub use self::{background::Background, rotate_showcase::RotateShowcase};
