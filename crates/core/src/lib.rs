//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod hand;
pub mod inventory;
pub mod joker;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shop;
pub mod state;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use hand::*;
pub use inventory::*;
pub use joker::*;
pub use rng::*;
pub use scoring::*;
pub use session::*;
pub use shop::*;
pub use state::*;
