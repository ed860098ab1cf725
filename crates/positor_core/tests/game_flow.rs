//! End-to-end game flow through the command handlers.

use std::sync::Arc;

use positor_core::handlers::{handle_command, Command, CommandContext, Reply};
use positor_core::ontology::Ontology;
use positor_core::session::create_seeded_store;

fn ctx(channel: &str) -> CommandContext {
    CommandContext {
        channel: channel.to_string(),
        author: "player".to_string(),
    }
}

fn guess_for(intended: bool) -> Command {
    if intended {
        Command::Affirm
    } else {
        Command::Deny
    }
}

#[tokio::test]
async fn full_game_to_a_loss() {
    let store = create_seeded_store(Arc::new(Ontology::builtin()), 1234);
    let ctx = ctx("games");

    // Start yields a statement and a hint
    let mut intended = match handle_command(&store, &ctx, Command::Start).await {
        Reply::GameStarted {
            statement,
            intended,
        } => {
            assert!(statement.ends_with('.'));
            intended
        }
        other => panic!("expected GameStarted, got {:?}", other),
    };

    // Answer correctly three times
    for expected_score in 1..=3 {
        let reply = handle_command(&store, &ctx, guess_for(intended)).await;
        match reply {
            Reply::Correct {
                score,
                statement,
                intended: next,
            } => {
                assert_eq!(score, expected_score);
                assert!(statement.ends_with('.'));
                intended = next;
            }
            other => panic!("expected Correct, got {:?}", other),
        }
    }

    // Then answer wrong on purpose
    let reply = handle_command(&store, &ctx, guess_for(!intended)).await;
    match reply {
        Reply::Incorrect { final_score } => assert_eq!(final_score, 3),
        other => panic!("expected Incorrect, got {:?}", other),
    }

    // The session is gone
    let reply = handle_command(&store, &ctx, Command::Affirm).await;
    assert!(matches!(reply, Reply::NoActiveSession));

    // And a fresh start begins at zero again
    let reply = handle_command(&store, &ctx, Command::Start).await;
    assert!(matches!(reply, Reply::GameStarted { .. }));
}

#[tokio::test]
async fn start_twice_reports_already_active() {
    let store = create_seeded_store(Arc::new(Ontology::builtin()), 5);
    let ctx = ctx("games");

    handle_command(&store, &ctx, Command::Start).await;
    let reply = handle_command(&store, &ctx, Command::Start).await;
    assert!(matches!(reply, Reply::AlreadyActive));
}

#[tokio::test]
async fn answer_before_start_reports_no_session() {
    let store = create_seeded_store(Arc::new(Ontology::builtin()), 5);
    let reply = handle_command(&store, &ctx("games"), Command::Deny).await;
    assert!(matches!(reply, Reply::NoActiveSession));
}

#[tokio::test]
async fn end_reports_final_score() {
    let store = create_seeded_store(Arc::new(Ontology::builtin()), 77);
    let ctx = ctx("games");

    let intended = match handle_command(&store, &ctx, Command::Start).await {
        Reply::GameStarted { intended, .. } => intended,
        other => panic!("expected GameStarted, got {:?}", other),
    };
    handle_command(&store, &ctx, guess_for(intended)).await;

    let reply = handle_command(&store, &ctx, Command::End).await;
    match reply {
        Reply::GameEnded { final_score } => assert_eq!(final_score, 1),
        other => panic!("expected GameEnded, got {:?}", other),
    }

    let reply = handle_command(&store, &ctx, Command::End).await;
    assert!(matches!(reply, Reply::NoActiveSession));
}

#[tokio::test]
async fn channels_do_not_share_sessions() {
    let store = create_seeded_store(Arc::new(Ontology::builtin()), 8);

    let alpha = ctx("alpha");
    let beta = ctx("beta");

    handle_command(&store, &alpha, Command::Start).await;
    handle_command(&store, &beta, Command::Start).await;

    // Ending alpha's game does not disturb beta's
    handle_command(&store, &alpha, Command::End).await;
    let reply = handle_command(&store, &beta, Command::Start).await;
    assert!(matches!(reply, Reply::AlreadyActive));
}

#[tokio::test]
async fn same_channel_commands_serialize() {
    let store = create_seeded_store(Arc::new(Ontology::builtin()), 21);
    let ctx = ctx("busy");

    handle_command(&store, &ctx, Command::Start).await;

    // Fire a burst of concurrent answers at one channel; the store lock
    // serializes them, so exactly one outcome path wins each round and
    // nothing double-scores or panics.
    let mut handles = Vec::new();
    for _ in 0..16 {
        let store = store.clone();
        let ctx = ctx.clone();
        handles.push(tokio::spawn(async move {
            handle_command(&store, &ctx, Command::Affirm).await
        }));
    }
    for handle in handles {
        let reply = handle.await.expect("task panicked");
        assert!(matches!(
            reply,
            Reply::Correct { .. } | Reply::Incorrect { .. } | Reply::NoActiveSession
        ));
    }
}
