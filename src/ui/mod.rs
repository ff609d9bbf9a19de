use anyhow::Result;
use inquire::InquireError;

mod render;
mod spinner;
mod theme;

pub use render::{print_result, render_result};
pub use spinner::Spinner;
pub use theme::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs a function that uses interactive prompts and handles user cancellation gracefully.
///
/// If the user cancels a prompt (Ctrl+C or Escape), a newline is printed to clean up
/// the terminal and `Ok(None)` is returned instead of propagating the error.
pub fn handle_prompt_cancellation<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            eprintln!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
