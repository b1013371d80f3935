use std::time::Duration;

use crate::MODAL_CLOSE_DELAY;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Hidden,
    Open,
    /// Close animation running; hide once the delay has passed.
    Closing,
}

/// Open/close lifecycle shared by the detail and sign-out dialogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    phase: ModalPhase,
}

impl ModalState {
    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    pub fn open(&mut self) {
        self.phase = ModalPhase::Open;
    }

    /// Starts closing. Returns the delay before the dialog should be hidden,
    /// or `None` when it was not open.
    pub fn close(&mut self) -> Option<Duration> {
        if self.phase != ModalPhase::Open {
            return None;
        }
        self.phase = ModalPhase::Closing;
        Some(MODAL_CLOSE_DELAY)
    }

    /// Returns `true` if the dialog should now be hidden. A reopen during the
    /// close animation wins.
    pub fn finish_close(&mut self) -> bool {
        if self.phase != ModalPhase::Closing {
            return false;
        }
        self.phase = ModalPhase::Hidden;
        true
    }
}
