use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Escape or Ctrl+C at an `inquire` prompt.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs a prompt-driven command. Backing out of a prompt ends the command
/// quietly; any other failure is returned.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    f().or_else(|e| {
        if e.downcast_ref::<InquireError>()
            .is_some_and(is_prompt_cancelled)
        {
            println!();
            Ok(())
        } else {
            Err(e)
        }
    })
}
