// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.
// While a modal is open it absorbs every key, digits included, so a scan can
// never land in the middle of a dialog.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Close the modal and clear the record set
    ConfirmReset,
}

/// Available modal types
#[derive(Debug, Clone)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Destructive-action gate shown before clearing the record set
    ConfirmReset,
    /// Blocking notice with a message, dismissed with Enter or Esc
    Notice(String),
    /// Recent log entries from the in-memory ring buffer
    Logs,
}

impl Modal {
    /// Create a help modal
    pub fn help() -> Self {
        Modal::Help
    }

    /// Create the reset confirmation modal
    pub fn confirm_reset() -> Self {
        Modal::ConfirmReset
    }

    /// Create a notice modal with the given message
    pub fn notice(message: impl Into<String>) -> Self {
        Modal::Notice(message.into())
    }

    /// Create a logs modal
    pub fn logs() -> Self {
        Modal::Logs
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::ConfirmReset => match key {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                    ModalAction::ConfirmReset
                }
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
            Modal::Notice(_) => match key {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
            Modal::Logs => match key {
                KeyCode::Esc | KeyCode::Char('l') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    }
}
