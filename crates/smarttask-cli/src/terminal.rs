//! Terminal rendering of dashboard output.

use serde_json::json;
use smarttask_core::{DisplayCard, OutputFormat, Presentation, Strategy, View};

/// View that prints results to stdout and errors to stderr.
///
/// Output is written as it arrives, so there is no slot state to keep:
/// clearing the error slot is a no-op on a terminal.
pub struct TerminalView {
    strategy: Strategy,
    format: OutputFormat,
}

impl TerminalView {
    pub fn new(strategy: Strategy, format: OutputFormat) -> Self {
        Self { strategy, format }
    }
}

impl View for TerminalView {
    fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn show_error(&self, message: &str) {
        if !message.is_empty() {
            eprintln!("error: {message}");
        }
    }

    fn clear_error(&self) {}

    fn show_results(&self, presentation: Presentation) {
        let out = match self.format {
            OutputFormat::Text => render_text(&presentation),
            OutputFormat::Json => match render_json(&presentation) {
                Ok(out) => out,
                Err(e) => {
                    eprintln!("error: {e}");
                    return;
                }
            },
        };
        println!("{out}");
    }
}

/// Plain-text layout: one numbered block per card.
pub fn render_text(presentation: &Presentation) -> String {
    match presentation {
        Presentation::Placeholder(message) => message.to_string(),
        Presentation::Cards(cards) => cards
            .iter()
            .enumerate()
            .map(|(i, card)| render_card(i + 1, card))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn render_card(position: usize, card: &DisplayCard) -> String {
    let mut header = format!("{position}. {}", card.title);
    if let Some(score) = &card.score {
        header.push_str("  ");
        header.push_str(score);
    }
    format!(
        "{header}\n   {} • {}\n   {}",
        card.badge, card.meta, card.explanation
    )
}

/// JSON layout: the card array, or `{"message": ...}` for the placeholder.
pub fn render_json(presentation: &Presentation) -> serde_json::Result<String> {
    match presentation {
        Presentation::Placeholder(message) => serde_json::to_string_pretty(&json!({ "message": message })),
        Presentation::Cards(cards) => serde_json::to_string_pretty(cards),
    }
}
