//! Engine construction and engine-vs-engine play for Hex.
//!
//! This crate is the single place that knows every engine. Callers pick an
//! [`EngineKind`], turn the loaded configuration into an [`EngineSpec`] and
//! build an [`AnyEngine`] from it.
//!
//! # Usage
//!
//! ```rust
//! use engine_config::HexConfig;
//! use hex_board::Color;
//! use hex_engines::{self_play, EngineKind, EngineSpec};
//!
//! let mut config = HexConfig::default();
//! config.minimax.depth = 1;
//! config.mcts.iterations = 50;
//! config.mcts.seed = Some(1);
//!
//! let mut red = EngineSpec::from_config(EngineKind::Minimax, &config).unwrap().build();
//! let mut blue = EngineSpec::from_config(EngineKind::Mcts, &config).unwrap().build();
//!
//! let record = self_play(&mut red, &mut blue, 4).unwrap();
//! assert!(record.winner.is_player());
//! ```

mod engines;
mod error;
mod game;

pub use engines::{AnyEngine, EngineKind, EngineSpec};
pub use error::BuildError;
pub use game::{self_play, GameRecord, MatchTally};
