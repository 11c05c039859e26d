use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Shows that a request is outstanding. Hidden when stderr is not a terminal.
///
/// Clears itself when finished or dropped.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    #[allow(clippy::unwrap_used)]
    pub fn new(message: &str) -> Self {
        let target = if std::io::stderr().is_terminal() {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let progress_bar = ProgressBar::with_draw_target(None, target);
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["◐", "◓", "◑", "◒", "●"])
                .template("{spinner} {msg} {elapsed:.dim}")
                .unwrap(),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(120));

        Self { progress_bar }
    }

    pub fn stop(self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.progress_bar.is_finished() {
            self.progress_bar.finish_and_clear();
        }
    }
}
