use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Turns a prompt result into `Ok(None)` when the user cancelled it
/// (Ctrl+C or Escape), printing a newline to clean up the terminal.
pub fn cancellable<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_prompt_cancelled(&e) => {
            println!();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
