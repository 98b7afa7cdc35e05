//! Modal overlays
//!
//! Overlays stack: opening help from the quit prompt layers it on top, and
//! closing always peels the topmost one. Only the top modal gets input.

/// An overlay drawn over the home screen
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation prompt
    QuitConfirm,
    /// Status filter picker
    StatusFilter,
    /// Key binding overview
    Help,
}

/// Stack of open overlays, bottom to top.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// The modal currently receiving input, if any
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_peels_newest_overlay_first() {
        let mut modals = ModalStack::new();
        modals.push(Modal::QuitConfirm);
        modals.push(Modal::StatusFilter);

        assert_eq!(modals.pop(), Some(Modal::StatusFilter));
        assert_eq!(modals.pop(), Some(Modal::QuitConfirm));
        assert_eq!(modals.pop(), None);
    }

    #[test]
    fn test_top_tracks_the_input_target() {
        let mut modals = ModalStack::new();
        assert!(modals.is_empty());
        assert!(modals.top().is_none());

        modals.push(Modal::Help);
        assert_eq!(modals.top(), Some(&Modal::Help));

        modals.push(Modal::StatusFilter);
        assert_eq!(modals.top(), Some(&Modal::StatusFilter));
        assert!(!modals.is_empty());
    }
}
