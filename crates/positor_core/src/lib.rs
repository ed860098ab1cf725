//! Positor game engine - a chat quiz over categorical statements.
//!
//! Generates quantified statements ("All dogs are cats."), decides their
//! intended truth value from a small term ontology, and tracks one game
//! session (pending statement plus score) per chat channel. Transport is
//! someone else's job: callers feed in commands and deliver replies.

pub mod error;
pub mod generator;
pub mod handlers;
pub mod ontology;
pub mod session;
pub mod statement;
pub mod truth;

pub use error::PositorError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
