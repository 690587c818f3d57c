use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use tagchat::chat::DEFAULT_RECENT_COUNT;
use tagchat::command::typing_hints;
use tagchat::screen::{create_screen, format_message, format_suggestions};
use tagchat::tag::seed_repository;
use tagchat::{ChatSession, Config};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = tagchat::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        tagchat::logging::init_console_only(&config.logging.level);
    }

    let repo = match seed_repository(&config.tags) {
        Ok(repo) => repo,
        Err(e) => {
            error!("Failed to load seed tags: {e}");
            eprintln!("Failed to load seed tags: {e}");
            std::process::exit(1);
        }
    };

    info!(
        user = %config.user.name,
        bot = %config.bot.name,
        prefix = %config.bot.prefix,
        "tagchat started"
    );

    let screen = create_screen(config.display.ansi);
    let reveal = config.display.reveal_spoilers;
    let prefix = config.bot.prefix;
    let mut session = ChatSession::new(&config, repo);

    for message in session.log().recent(DEFAULT_RECENT_COUNT) {
        println!("{}\n", format_message(message, screen.as_ref(), reveal));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        error!("Failed to read input: {e}");
                        break;
                    }
                };

                if let Some(message) = session.submit(&line) {
                    println!("{}\n", format_message(message, screen.as_ref(), reveal));
                }

                let hints = typing_hints(line.trim_end(), prefix);
                if !hints.is_empty() {
                    println!("{}\n", format_suggestions(&hints, screen.as_ref(), prefix));
                }
            }
            Some(reply) = session.next_reply(), if session.pending() > 0 => {
                println!("{}\n", format_message(&reply, screen.as_ref(), reveal));
            }
        }
    }

    // Deliver replies still in flight before exiting.
    while let Some(reply) = session.next_reply().await {
        println!("{}\n", format_message(&reply, screen.as_ref(), reveal));
    }

    info!("tagchat stopped");
}
