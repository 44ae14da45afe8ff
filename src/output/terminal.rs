// Colored terminal output for chat messages and classification results.
//
// This module handles all terminal-specific formatting: per-class colors,
// the confidence bar, and the status display. main.rs delegates here.

use colored::{ColoredString, Colorize};

use crate::chat::{Message, Role};
use crate::classify::traits::{ClassificationResult, Label};

const BAR_WIDTH: usize = 30;

/// Color a label the way the original UI did: hate speech red, offensive
/// language yellow, neither green.
fn colorize_label(label: Label) -> ColoredString {
    match label {
        Label::HateSpeech => label.as_str().red().bold(),
        Label::OffensiveLanguage => label.as_str().yellow().bold(),
        Label::Neither => label.as_str().green().bold(),
    }
}

/// Render a classification result with its confidence bar.
pub fn display_result(result: &ClassificationResult) {
    let filled = ((result.confidence * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));

    println!("  {}", "Analysis Result".bold());
    println!("  Classification: {}", colorize_label(result.label));
    println!(
        "  Confidence:     [{}] {:.1}%",
        bar,
        result.confidence * 100.0
    );
}

/// Render one chat message. User messages are right-aligned-ish with a
/// prefix; assistant messages carry their prediction block when present.
pub fn render_message(message: &Message) {
    match message.role {
        Role::User => println!("{} {}", "you:".blue().bold(), message.content),
        Role::Assistant => {
            if let Some(result) = &message.prediction {
                println!("{}", "bot:".magenta().bold());
                display_result(result);
            } else {
                println!("{} {}", "bot:".magenta().bold(), message.content);
            }
        }
    }
    println!();
}

/// Show artifact/status information for the `status` subcommand.
pub fn display_status(model_dir: &std::path::Path, vocab_size: usize, max_length: usize) {
    println!("Model directory: {}", model_dir.display());
    println!("Vocabulary:      {vocab_size} tokens");
    println!("Sequence length: {max_length}");
    println!();
    println!("Classification categories:");
    println!("  {} — contains hateful content", colorize_label(Label::HateSpeech));
    println!(
        "  {} — offensive but not hateful",
        colorize_label(Label::OffensiveLanguage)
    );
    println!("  {} — clean, neutral content", colorize_label(Label::Neither));
}
