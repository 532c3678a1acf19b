//! Modal dialog state.

/// Where a click on an open modal landed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// The backdrop element itself.
    Backdrop,

    /// Anything inside the dialog's content.
    Content,

    /// The dismiss control.
    CloseControl,
}

/// A dialog layered over the chat log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modal {
    body: Option<String>,
}

impl Modal {
    /// Creates a closed modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the modal with the given body, replacing any body already shown.
    pub fn open(&mut self, body: impl Into<String>) {
        self.body = Some(body.into());
    }

    /// Hides the modal.
    pub fn close(&mut self) {
        self.body = None;
    }

    /// Returns true while the modal is shown.
    pub fn is_open(&self) -> bool {
        self.body.is_some()
    }

    /// The body of an open modal.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Applies a click and returns true if it closed the modal.
    ///
    /// Only the backdrop and the dismiss control close the modal; clicks on
    /// content, or on a closed modal, change nothing.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        if !self.is_open() {
            return false;
        }
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseControl => {
                self.close();
                true
            }
            ClickTarget::Content => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_click_closes() {
        let mut modal = Modal::new();
        modal.open("help");
        assert!(modal.click(ClickTarget::Backdrop));
        assert!(!modal.is_open());
    }

    #[test]
    fn content_click_keeps_open() {
        let mut modal = Modal::new();
        modal.open("help");
        assert!(!modal.click(ClickTarget::Content));
        assert!(modal.is_open());
        assert_eq!(modal.body(), Some("help"));
    }

    #[test]
    fn close_control_closes() {
        let mut modal = Modal::new();
        modal.open("help");
        assert!(modal.click(ClickTarget::CloseControl));
        assert!(modal.body().is_none());
    }

    #[test]
    fn clicks_on_closed_modal_are_ignored() {
        let mut modal = Modal::new();
        assert!(!modal.click(ClickTarget::Backdrop));
        assert!(!modal.is_open());
    }
}
