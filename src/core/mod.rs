//! Core engine types: seats, configuration, errors, RNG.
//!
//! Everything here is independent of the row rules; the other modules
//! build on these types.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use error::{CommitProblem, ConfigError, RoundError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
