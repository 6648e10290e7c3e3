//! CLI command definitions

use clap::{Parser, ValueEnum};
use consult_domain::{OutputFormat, Persona};
use std::path::PathBuf;

/// Expert persona selectable from the command line
///
/// Only the two experts are offered; the generic-assistant fallback is not
/// reachable from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PersonaArg {
    /// Expert in child-rearing
    #[value(alias = "A")]
    Childcare,
    /// Expert in elder care
    #[value(alias = "B")]
    ElderCare,
}

impl From<PersonaArg> for Persona {
    fn from(arg: PersonaArg) -> Self {
        match arg {
            PersonaArg::Childcare => Persona::Childcare,
            PersonaArg::ElderCare => Persona::ElderCare,
        }
    }
}

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Banners and plain answer text
    Text,
    /// One JSON object per submission
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for expert-consult
#[derive(Parser, Debug)]
#[command(name = "expert-consult")]
#[command(author, version, about = "Ask a childcare or elder-care expert a question")]
#[command(long_about = r#"
expert-consult sends your question to a hosted language model that answers
as the expert you pick: a childcare expert or an elder-care expert.

Without a QUESTION the interactive form opens. With one, a single answer is
printed and the program exits (status 0 = answered, 1 = error, 2 = blank).

The API key is read from OPENAI_API_KEY; a .env file in the working
directory is loaded first.

Configuration files are loaded from (in priority order):
1. CONSULT_* environment variables
2. --config <path>     Explicit config file
3. ./consult.toml      Project-level config
4. ~/.config/expert-consult/config.toml   Global config

Example:
  expert-consult --persona childcare "How do I get my toddler to sleep earlier?"
  expert-consult -p elder-care -o json "What assistive devices help with mobility?"
  expert-consult
"#)]
pub struct Cli {
    /// The question to ask (opens the interactive form when omitted)
    pub question: Option<String>,

    /// Which expert answers
    #[arg(short, long, value_enum)]
    pub persona: Option<PersonaArg>,

    /// Open the interactive form even when a question is given
    #[arg(short, long)]
    pub interactive: bool,

    /// Model to use instead of the configured one
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether to open the interactive form
    pub fn wants_form(&self) -> bool {
        self.interactive || self.question.is_none()
    }

    /// Whether to show the spinner, given the configured `form.show_progress`
    pub fn show_progress(&self, configured: bool) -> bool {
        configured && !self.quiet
    }
}
