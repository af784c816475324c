use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// A spinner on stderr, or nothing when progress output is off.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}

/// Show a spinner while `future` runs. The spinner is cleared on success and
/// left with a failure note otherwise.
pub async fn track<T, E>(message: &str, future: impl Future<Output = Result<T, E>>) -> Result<T, E> {
    let progress = Progress::spinner(message);
    let result = future.await;
    match &result {
        Ok(_) => progress.finish_clear(),
        Err(_) => progress.finish_err(&format!("{} failed", message.trim_end_matches("..."))),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::track;

    #[tokio::test]
    async fn track_passes_results_through() {
        let ok: Result<u8, &str> = track("Working...", async { Ok(7) }).await;
        assert_eq!(ok, Ok(7));
        let err: Result<u8, &str> = track("Working...", async { Err("boom") }).await;
        assert_eq!(err, Err("boom"));
    }
}
