pub mod logger;

mod coordinate;
mod direction;
mod settings;
mod snake;
mod world;
mod world_rng;

pub use coordinate::Coordinate;
pub use direction::Direction;
pub use settings::WorldSettings;
pub use snake::{MoveFn, Snake};
pub use world::{ListenerId, World};
pub use world_rng::WorldRng;
