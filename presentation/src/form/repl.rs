//! Interactive consultation form (readline-based)

use super::input::{LineOutcome, QuestionBuffer};
use super::submission::ConsultForm;
use crate::config::FormConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::SpinnerProgress;
use consult_application::NoProgress;
use consult_domain::{OutputFormat, Persona};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

/// Parse a selector argument into one of the two experts.
///
/// Returns `None` for anything else; the form never selects the generic
/// assistant.
pub fn parse_selection(arg: &str) -> Option<Persona> {
    let Ok(persona) = arg.trim().parse::<Persona>();
    if persona.is_fallback() { None } else { Some(persona) }
}

/// Slash command understood by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Quit,
    Help,
    /// `/persona` without an argument
    ShowPersona,
    /// `/persona <arg>`
    SetPersona(String),
}

impl FormCommand {
    /// Parse `line` as a command.
    ///
    /// Only known command names count; any other line, including one that
    /// starts with `/`, is question text.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => Some(FormCommand::Quit),
            "/help" | "/h" | "/?" => Some(FormCommand::Help),
            "/persona" | "/p" if arg.is_empty() => Some(FormCommand::ShowPersona),
            "/persona" | "/p" => Some(FormCommand::SetPersona(arg.to_string())),
            _ => None,
        }
    }
}

/// Interactive form: persona selector, question input, submit
///
/// One submission runs at a time; the prompt comes back only after the
/// answer or error has been shown.
pub struct FormRepl {
    form: ConsultForm,
    persona: Persona,
    config: FormConfig,
    format: OutputFormat,
}

impl FormRepl {
    pub fn new(form: ConsultForm, config: FormConfig, format: OutputFormat) -> Self {
        Self {
            form,
            persona: config.default_persona.clone(),
            config,
            format,
        }
    }

    /// Run the form until `/quit` or EOF, submitting `initial` first when given
    pub async fn run_with_initial(&mut self, initial: Option<&str>) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        if let Some(question) = initial {
            self.process_question(question).await;
        }

        let mut buffer = QuestionBuffer::new();

        loop {
            let prompt = if buffer.is_pending() {
                "... ".to_string()
            } else {
                format!("[{}] > ", self.persona.as_str())
            };

            match rl.readline(&prompt) {
                Ok(line) => {
                    // Commands only at the start of a question
                    if !buffer.is_pending() {
                        if let Some(command) = FormCommand::parse(&line) {
                            if self.handle_command(command) {
                                break;
                            }
                            continue;
                        }
                    }

                    let question = match buffer.push_line(&line) {
                        LineOutcome::Continue => continue,
                        LineOutcome::Complete(question) => question,
                    };

                    if !question.trim().is_empty() {
                        let _ = rl.add_history_entry(question.as_str());
                    }

                    self.process_question(&question).await;
                }
                Err(ReadlineError::Interrupted) => {
                    buffer.clear();
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Expert Consultation Desk           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Ask an expert a question.");
        println!();
        print!("{}", ConsoleFormatter::persona_selector(&self.persona));
        println!();
        println!("Type your question and press Enter.");
        println!("End a line with \\ to continue on the next line.");
        println!("Commands: /persona [A|B], /help, /quit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, command: FormCommand) -> bool {
        match command {
            FormCommand::Quit => {
                println!("Bye!");
                true
            }
            FormCommand::Help => {
                println!();
                println!("Commands:");
                println!("  /persona           - Show the expert selector");
                println!("  /persona <A|B>     - Choose the childcare (A) or elder-care (B) expert");
                println!("  /help, /h, /?      - Show this help");
                println!("  /quit, /exit, /q   - Exit");
                println!();
                false
            }
            FormCommand::ShowPersona => {
                println!();
                print!("{}", ConsoleFormatter::persona_selector(&self.persona));
                println!();
                false
            }
            FormCommand::SetPersona(arg) => {
                match parse_selection(&arg) {
                    Some(persona) => {
                        debug!("Persona changed to {}", persona.as_str());
                        println!("Now asking: {}", persona);
                        self.persona = persona;
                    }
                    None => {
                        println!("Unknown expert: {}", arg);
                        println!("Choose A (childcare) or B (elder-care)");
                    }
                }
                false
            }
        }
    }

    /// Submit one question with the current persona and print the outcome
    pub async fn process_question(&self, question: &str) {
        println!();

        let submission = if self.config.show_progress {
            let progress = SpinnerProgress::new();
            self.form
                .submit_with_progress(question, &self.persona, &progress)
                .await
        } else {
            self.form
                .submit_with_progress(question, &self.persona, &NoProgress)
                .await
        };

        ConsoleFormatter::print(&submission, self.format);
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_accepts_experts() {
        assert_eq!(parse_selection("A"), Some(Persona::Childcare));
        assert_eq!(parse_selection(" B "), Some(Persona::ElderCare));
        assert_eq!(parse_selection("childcare"), Some(Persona::Childcare));
        assert_eq!(parse_selection("elder-care"), Some(Persona::ElderCare));
    }

    #[test]
    fn test_parse_selection_rejects_fallback() {
        assert_eq!(parse_selection("C"), None);
        assert_eq!(parse_selection(""), None);
    }

    #[test]
    fn test_known_commands() {
        assert_eq!(FormCommand::parse("/quit"), Some(FormCommand::Quit));
        assert_eq!(FormCommand::parse("  /q  "), Some(FormCommand::Quit));
        assert_eq!(FormCommand::parse("/help"), Some(FormCommand::Help));
        assert_eq!(FormCommand::parse("/persona"), Some(FormCommand::ShowPersona));
        assert_eq!(
            FormCommand::parse("/persona  B "),
            Some(FormCommand::SetPersona("B".to_string()))
        );
    }

    #[test]
    fn test_slash_text_is_a_question() {
        assert_eq!(
            FormCommand::parse("/usr/lib question: is this path safe for kids' tablets?"),
            None
        );
        assert_eq!(FormCommand::parse("/quitting smoking around a newborn"), None);
        assert_eq!(FormCommand::parse("How do I use /help pages?"), None);
    }
}
