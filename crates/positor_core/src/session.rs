//! Per-channel game sessions.
//!
//! Each chat channel holds at most one session: the pending statement, its
//! intended truth value, and the running score. Sessions live purely in
//! memory and die with the process.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::PositorError;
use crate::generator::StatementGenerator;
use crate::ontology::Ontology;
use crate::statement::Statement;
use crate::truth;

/// One channel's game state
#[derive(Debug, Clone)]
pub struct Session {
    pub statement: Statement,
    pub intended: bool,
    pub score: u32,
}

/// Snapshot of a pending round, for rendering the prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundView {
    pub text: String,
    pub intended: bool,
}

/// What happened when the player answered
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOutcome {
    Correct { score: u32, next: RoundView },
    Incorrect { final_score: u32 },
}

/// All live sessions, keyed by channel identifier
pub struct SessionStore {
    ontology: Arc<Ontology>,
    generator: StatementGenerator,
    sessions: HashMap<String, Session>,
}

impl SessionStore {
    pub fn new(ontology: Arc<Ontology>) -> Self {
        Self {
            generator: StatementGenerator::new(ontology.clone()),
            ontology,
            sessions: HashMap::new(),
        }
    }

    /// Seeded store: the statement sequence is reproducible
    pub fn with_seed(ontology: Arc<Ontology>, seed: u64) -> Self {
        Self {
            generator: StatementGenerator::with_seed(ontology.clone(), seed),
            ontology,
            sessions: HashMap::new(),
        }
    }

    /// Draw and evaluate the next statement
    fn fresh_round(&mut self) -> Result<(Statement, bool), PositorError> {
        let statement = self.generator.generate();
        let intended = truth::evaluate(&statement, &self.ontology)?;
        Ok((statement, intended))
    }

    /// Begin a game for the channel. Fails with `AlreadyActive`, without
    /// touching the existing session, if one is live.
    pub fn start(&mut self, channel: &str) -> Result<RoundView, PositorError> {
        if self.sessions.contains_key(channel) {
            return Err(PositorError::AlreadyActive);
        }

        let (statement, intended) = self.fresh_round()?;
        let view = RoundView {
            text: statement.text(),
            intended,
        };
        self.sessions.insert(
            channel.to_string(),
            Session {
                statement,
                intended,
                score: 0,
            },
        );

        info!("Game started in channel {}", channel);
        Ok(view)
    }

    /// Judge the player's guess against the pending statement.
    ///
    /// A correct guess bumps the score and installs the next statement; a
    /// wrong one deletes the session. The session is untouched if drawing
    /// the replacement statement fails.
    pub fn answer(&mut self, channel: &str, guess: bool) -> Result<AnswerOutcome, PositorError> {
        let intended = self
            .sessions
            .get(channel)
            .map(|s| s.intended)
            .ok_or(PositorError::NoActiveSession)?;

        if guess != intended {
            let session = self
                .sessions
                .remove(channel)
                .ok_or(PositorError::NoActiveSession)?;
            info!(
                "Game over in channel {} with final score {}",
                channel, session.score
            );
            return Ok(AnswerOutcome::Incorrect {
                final_score: session.score,
            });
        }

        let (statement, next_intended) = self.fresh_round()?;
        let session = self
            .sessions
            .get_mut(channel)
            .ok_or(PositorError::NoActiveSession)?;
        session.score += 1;
        session.statement = statement;
        session.intended = next_intended;

        Ok(AnswerOutcome::Correct {
            score: session.score,
            next: RoundView {
                text: session.statement.text(),
                intended: next_intended,
            },
        })
    }

    /// Abandon the channel's game, returning the final score
    pub fn end(&mut self, channel: &str) -> Result<u32, PositorError> {
        let session = self
            .sessions
            .remove(channel)
            .ok_or(PositorError::NoActiveSession)?;
        info!(
            "Game ended in channel {} with final score {}",
            channel, session.score
        );
        Ok(session.score)
    }

    /// Peek at a channel's session
    pub fn session(&self, channel: &str) -> Option<&Session> {
        self.sessions.get(channel)
    }

    /// Number of live sessions
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }
}

/// Thread-safe shared store handle
pub type SharedStore = Arc<RwLock<SessionStore>>;

pub fn create_shared_store(ontology: Arc<Ontology>) -> SharedStore {
    Arc::new(RwLock::new(SessionStore::new(ontology)))
}

pub fn create_seeded_store(ontology: Arc<Ontology>, seed: u64) -> SharedStore {
    Arc::new(RwLock::new(SessionStore::with_seed(ontology, seed)))
}
