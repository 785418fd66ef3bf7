//! Factory functions producing fixture JSON for the three record types.

mod player;
mod training;
mod user;

pub use player::{player, trainer};
pub use training::{training, training_with_trainers};
pub use user::user;
