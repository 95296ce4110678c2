use console::{style, Style};
use indicatif::{ProgressBar, ProgressStyle};

use factcheck_core::Tone;
use factcheck_out::RenderedCard;

pub struct Display;

impl Display {
    pub fn new() -> Self {
        Self
    }

    pub fn print_header(&self, text: &str) {
        println!();
        println!("{}", style(text).bold().cyan());
        println!("{}", style("═".repeat(60)).dim());
        println!();
    }

    pub fn print_card(&self, card: &RenderedCard) {
        let tone = self.tone_style(card.tone);

        println!();
        println!("{}", tone.clone().bold().apply_to(&card.badge));
        if let Some(headline) = &card.headline {
            println!("{}", tone.apply_to(headline));
        }
        println!("{}", style("─".repeat(60)).dim());
        println!("{}", card.body);
        println!();
    }

    pub fn print_block(&self, text: &str) {
        println!("{}", text);
    }

    pub fn print_dim(&self, text: &str) {
        println!("{}", style(text).dim());
    }

    pub fn print_success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), message);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{}", style(message).red().bold());
    }

    pub fn print_warning(&self, message: &str) {
        println!("{} {}", style("!").yellow().bold(), message);
    }

    pub fn print_info(&self, message: &str) {
        println!("{} {}", style("→").cyan(), message);
    }

    /// Spinner shown while a verification is in flight
    pub fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        pb
    }

    fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Green => Style::new().green(),
            Tone::Red => Style::new().red(),
            Tone::Yellow => Style::new().yellow(),
            Tone::Gray => Style::new().white().dim(),
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
