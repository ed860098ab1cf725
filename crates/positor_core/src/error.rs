//! Error types for the positor game engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PositorError {
    #[error("A game is already in progress in this channel")]
    AlreadyActive,

    #[error("No active game in this channel")]
    NoActiveSession,

    #[error("Term '{term}' is not in the ontology")]
    UnknownTerm { term: String },

    #[error("Ontology error: {0}")]
    Ontology(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
