//! Command handlers: drive the session store and describe the reply.
//!
//! The transport layer (console, or a real chat platform adapter) parses
//! its input into a `Command`, calls `handle_command`, and delivers the
//! rendered `Reply`. Game logic never touches the transport.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::PositorError;
use crate::session::{AnswerOutcome, SessionStore, SharedStore};

/// Command verbs understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Start,
    Affirm,
    Deny,
    End,
}

/// Where a command came from. The channel partitions sessions; the author
/// is only used to address the reply.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub channel: String,
    pub author: String,
}

/// Response descriptor handed back to the transport
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reply {
    GameStarted { statement: String, intended: bool },
    AlreadyActive,
    Correct { score: u32, statement: String, intended: bool },
    Incorrect { final_score: u32 },
    GameEnded { final_score: u32 },
    NoActiveSession,
    Fault { message: String },
}

impl Reply {
    /// The user-visible message, addressed to the author
    pub fn render(&self, author: &str) -> String {
        match self {
            Reply::GameStarted {
                statement,
                intended,
            } => format!(
                "{}, the positor says: '{}'\nDo you affirm or deny this statement? (Intended answer: {})",
                author,
                statement,
                hint(*intended)
            ),
            Reply::AlreadyActive => "A game is already in progress in this channel!".to_string(),
            Reply::Correct {
                score,
                statement,
                intended,
            } => format!(
                "{}, your response is correct. Current score: {}.\nNext statement: '{}'\nDo you affirm or deny? (Intended answer: {})",
                author,
                score,
                statement,
                hint(*intended)
            ),
            Reply::Incorrect { final_score } => format!(
                "{}, your response is incorrect. You lose! Final score: {}.",
                author, final_score
            ),
            Reply::GameEnded { final_score } => {
                format!("Game over. Final score: {}.", final_score)
            }
            Reply::NoActiveSession => "No active game in this channel.".to_string(),
            Reply::Fault { message } => {
                format!("The positor hit an internal fault: {}", message)
            }
        }
    }
}

fn hint(intended: bool) -> &'static str {
    if intended {
        "affirm"
    } else {
        "deny"
    }
}

/// Dispatch one command against the shared store.
///
/// Takes the write lock for the whole read-modify-write, so commands on
/// the same channel serialize and no update is lost.
pub async fn handle_command(store: &SharedStore, ctx: &CommandContext, command: Command) -> Reply {
    let mut store = store.write().await;
    match command {
        Command::Start => match store.start(&ctx.channel) {
            Ok(round) => Reply::GameStarted {
                statement: round.text,
                intended: round.intended,
            },
            Err(PositorError::AlreadyActive) => Reply::AlreadyActive,
            Err(e) => fault(&ctx.channel, e),
        },
        Command::Affirm => answer(&mut store, ctx, true),
        Command::Deny => answer(&mut store, ctx, false),
        Command::End => match store.end(&ctx.channel) {
            Ok(final_score) => Reply::GameEnded { final_score },
            Err(PositorError::NoActiveSession) => Reply::NoActiveSession,
            Err(e) => fault(&ctx.channel, e),
        },
    }
}

fn answer(store: &mut SessionStore, ctx: &CommandContext, guess: bool) -> Reply {
    match store.answer(&ctx.channel, guess) {
        Ok(AnswerOutcome::Correct { score, next }) => Reply::Correct {
            score,
            statement: next.text,
            intended: next.intended,
        },
        Ok(AnswerOutcome::Incorrect { final_score }) => Reply::Incorrect { final_score },
        Err(PositorError::NoActiveSession) => Reply::NoActiveSession,
        Err(e) => fault(&ctx.channel, e),
    }
}

/// Store-level failures mean the ontology and generator are out of sync.
/// Log loudly and tell the channel; never swallow.
fn fault(channel: &str, err: PositorError) -> Reply {
    error!("Command failed in channel {}: {}", channel, err);
    Reply::Fault {
        message: err.to_string(),
    }
}
