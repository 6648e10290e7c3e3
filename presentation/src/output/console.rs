//! Console output formatter for submission outcomes

use crate::form::Submission;
use colored::Colorize;
use consult_domain::{OutputFormat, Persona};

/// Formats submission outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format according to `format`
    pub fn render(submission: &Submission, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format(submission),
            OutputFormat::Json => Self::format_json(submission),
        }
    }

    /// Format as banners plus the answer text
    ///
    /// The answer itself is printed exactly as received.
    pub fn format(submission: &Submission) -> String {
        match submission {
            Submission::Answered { persona, answer } => {
                format!("{}\n\n{}\n", Self::success_banner(persona), answer)
            }
            Submission::BlankQuestion => Self::warning_banner("Please enter a question."),
            Submission::Failed { message, .. } => Self::error_banner(message),
        }
    }

    /// Format as JSON
    pub fn format_json(submission: &Submission) -> String {
        serde_json::to_string_pretty(submission).unwrap_or_else(|_| "{}".to_string())
    }

    /// Whether the rendered outcome belongs on stderr
    ///
    /// JSON always goes to stdout so it can be piped.
    pub fn is_error_output(submission: &Submission, format: OutputFormat) -> bool {
        format == OutputFormat::Text && !submission.is_answered()
    }

    /// Render and print to stdout or stderr
    pub fn print(submission: &Submission, format: OutputFormat) {
        let rendered = Self::render(submission, format);
        if Self::is_error_output(submission, format) {
            eprintln!("{}", rendered);
        } else {
            println!("{}", rendered);
        }
    }

    fn success_banner(persona: &Persona) -> String {
        format!("{} {}", "v".green().bold(), format!("Answer ({}):", persona).green().bold())
    }

    fn warning_banner(text: &str) -> String {
        format!("{} {}", "!".yellow().bold(), text.yellow())
    }

    fn error_banner(message: &str) -> String {
        format!(
            "{} {} {}",
            "x".red().bold(),
            "An error occurred:".red().bold(),
            message
        )
    }

    /// Persona selector listing, marking the current choice
    pub fn persona_selector(current: &Persona) -> String {
        let mut output = format!("{}\n", "Select an expert:".cyan().bold());
        for (key, persona) in ["A", "B"].iter().zip(Persona::selectable()) {
            let marker = if &persona == current { " (current)" } else { "" };
            output.push_str(&format!(
                "  [{}] {:<20} /persona {}{}\n",
                key,
                persona.label(),
                persona.as_str(),
                marker.dimmed()
            ));
        }
        output
    }
}
