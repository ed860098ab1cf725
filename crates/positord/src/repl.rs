//! Console transport: a read-eval-print loop over stdin.
//!
//! Stands in for a real chat platform adapter. One channel, one author,
//! plain text in and out.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::debug;

use positor_core::handlers::{handle_command, CommandContext, Reply};
use positor_core::session::SharedStore;

use crate::config::BotConfig;
use crate::parser;

/// Get current username from environment
fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "player".to_string())
}

fn print_welcome(prefix: &str) {
    println!("{}", "The positor is listening.".bold());
    println!(
        "Commands: {p}start, {p}affirm, {p}deny, {p}end. Type 'quit' to leave.",
        p = prefix
    );
    println!();
}

/// Run the console loop until EOF or quit
pub async fn run(store: SharedStore, config: &BotConfig) -> Result<()> {
    let ctx = CommandContext {
        channel: config.channel_name.clone(),
        author: current_user(),
    };

    print_welcome(&config.command_prefix);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            Some(Err(e)) => {
                eprintln!("Error reading input: {}", e);
                continue;
            }
            None => break, // EOF
        };

        if input.is_empty() {
            continue;
        }

        if matches!(input.as_str(), "quit" | "exit") {
            break;
        }

        let command = match parser::parse_command(&input, &config.command_prefix) {
            Some(command) => command,
            None => {
                println!(
                    "{}",
                    format!(
                        "Unknown command. Try {p}start, {p}affirm, {p}deny or {p}end.",
                        p = config.command_prefix
                    )
                    .yellow()
                );
                continue;
            }
        };

        debug!("Dispatching {:?} for channel {}", command, ctx.channel);
        let reply = handle_command(&store, &ctx, command).await;
        print_reply(&reply, &ctx.author);
    }

    println!("Goodbye.");
    Ok(())
}

fn print_reply(reply: &Reply, author: &str) {
    let text = reply.render(author);
    match reply {
        Reply::Correct { .. } => println!("{}", text.green()),
        Reply::Incorrect { .. } => println!("{}", text.red()),
        Reply::AlreadyActive | Reply::NoActiveSession => println!("{}", text.yellow()),
        Reply::Fault { .. } => println!("{}", text.bright_red()),
        _ => println!("{}", text),
    }
    println!();
}
