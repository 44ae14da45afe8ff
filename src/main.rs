use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod config;

use cinder::chat::{ChatSession, Outcome};
use cinder::classify::{load_pipeline, Pipeline};
use cinder::output::terminal;
use cinder::preprocess::normalize;

/// Cinder: hate speech detection chat for the terminal.
///
/// Classifies text as Hate Speech, Offensive Language, or Neither using a
/// pre-trained sequence model.
#[derive(Parser)]
#[command(name = "cinder", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat,

    /// Classify a single piece of text and exit
    Analyze {
        /// The text to classify
        text: String,
    },

    /// Show the normalizer output for a piece of text (pipeline debugging)
    Normalize {
        /// The text to normalize
        text: String,
    },

    /// Show model status (artifact location, vocabulary size, sequence length)
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cinder=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat => {
            let config = config::Config::load()?;
            config.require_model()?;
            let pipeline = load_pipeline(&config.model_dir)?;
            run_chat(&pipeline)?;
        }

        Commands::Analyze { text } => {
            let config = config::Config::load()?;
            config.require_model()?;
            let pipeline = load_pipeline(&config.model_dir)?;

            let result = pipeline.classify(&text)?;
            terminal::display_result(&result);
        }

        Commands::Normalize { text } => {
            // The normalizer needs no artifacts — it is a pure function
            println!("{}", normalize(&text));
        }

        Commands::Status => {
            let config = config::Config::load()?;
            config.require_model()?;
            let pipeline = load_pipeline(&config.model_dir)?;

            terminal::display_status(
                &config.model_dir,
                pipeline.vocab_size(),
                pipeline.max_length(),
            );
        }
    }

    Ok(())
}

/// The interactive loop: read a line, classify it, print the reply.
/// `/clear` resets the session, `/quit` (or EOF) exits.
fn run_chat(pipeline: &Pipeline) -> Result<()> {
    let mut session = ChatSession::new();

    for message in session.messages() {
        terminal::render_message(message);
    }
    println!(
        "{}",
        "Type text to analyze. /clear resets the session, /quit exits.".dimmed()
    );

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        match line {
            "/quit" | "/exit" => break,
            "/clear" => {
                session.clear();
                for message in session.messages() {
                    terminal::render_message(message);
                }
            }
            _ => match session.submit(pipeline, line) {
                Outcome::Replied(reply) => terminal::render_message(reply),
                Outcome::EmptyInput => {
                    println!("{}", "Please enter some text to analyze!".yellow());
                }
            },
        }
    }

    println!("Messages analyzed this session: {}", session.analyzed_count());
    Ok(())
}
