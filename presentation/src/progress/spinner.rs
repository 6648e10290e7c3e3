//! Spinner shown while waiting for the expert's answer

use consult_application::ConsultProgressNotifier;
use consult_domain::{Model, Persona};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Busy indicator drawn on stderr for the duration of one request
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsultProgressNotifier for SpinnerProgress {
    fn on_request_start(&self, persona: &Persona, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!(
            "The {} is thinking about your question ({})...",
            persona.label().to_lowercase(),
            model
        ));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_complete(&self, _success: bool) {
        if let Some(pb) = self.bar.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }
}
