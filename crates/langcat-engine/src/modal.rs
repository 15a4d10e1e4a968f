//! Detail modal state machine.
//!
//! Two states: hidden and visible. Only the close control, a backdrop
//! click and Escape close the modal; clicks inside the content area are
//! ignored.

use langcat_types::Item;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible(Item),
}

/// Inputs the modal reacts to while visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalInput {
    CloseButton,
    BackdropClick,
    ContentClick,
    Escape,
}

#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, ModalState::Visible(_))
    }

    /// Item currently shown, if any
    pub fn item(&self) -> Option<&Item> {
        match &self.state {
            ModalState::Visible(item) => Some(item),
            ModalState::Hidden => None,
        }
    }

    /// Show `item`, replacing whatever the modal displayed before
    pub fn open(&mut self, item: Item) {
        self.state = ModalState::Visible(item);
    }

    pub fn close(&mut self) {
        self.state = ModalState::Hidden;
    }

    /// Apply an input; returns `true` when the modal went from visible to hidden
    pub fn handle(&mut self, input: ModalInput) -> bool {
        if !self.is_visible() {
            return false;
        }

        match input {
            ModalInput::CloseButton | ModalInput::BackdropClick | ModalInput::Escape => {
                self.close();
                true
            }
            ModalInput::ContentClick => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rust() -> Item {
        Item::new("Rust", "safe systems", 20.0).with_release_year(2015)
    }

    #[test]
    fn test_starts_hidden() {
        let modal = ModalController::new();
        assert_eq!(modal.state(), &ModalState::Hidden);
        assert!(modal.item().is_none());
    }

    #[test]
    fn test_escape_closes() {
        let mut modal = ModalController::new();
        modal.open(rust());
        assert!(modal.is_visible());

        assert!(modal.handle(ModalInput::Escape));
        assert_eq!(modal.state(), &ModalState::Hidden);
    }

    #[test]
    fn test_content_click_keeps_open() {
        let mut modal = ModalController::new();
        modal.open(rust());

        assert!(!modal.handle(ModalInput::ContentClick));
        assert_eq!(modal.item().map(|i| i.name.as_str()), Some("Rust"));
    }

    #[test]
    fn test_backdrop_and_close_button_close() {
        let mut modal = ModalController::new();
        modal.open(rust());
        assert!(modal.handle(ModalInput::BackdropClick));

        modal.open(rust());
        assert!(modal.handle(ModalInput::CloseButton));
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_inputs_ignored_while_hidden() {
        let mut modal = ModalController::new();
        assert!(!modal.handle(ModalInput::Escape));
        assert!(!modal.handle(ModalInput::BackdropClick));
    }

    #[test]
    fn test_open_replaces_item() {
        let mut modal = ModalController::new();
        modal.open(rust());
        modal.open(Item::new("Go", "systems", 10.0));
        assert_eq!(modal.item().unwrap().name, "Go");
    }
}
