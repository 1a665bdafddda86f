/// Mobile navigation open/closed state. Every rendered attribute that has to
/// agree with it (panel class, backdrop class, ARIA) is derived through the
/// accessors below, so they cannot drift apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub is_open: bool,
}

impl NavState {
    pub fn toggled(self) -> Self {
        Self { is_open: !self.is_open }
    }

    pub fn closed(self) -> Self {
        Self { is_open: false }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open { "true" } else { "false" }
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open { "false" } else { "true" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_is_identity() {
        let start = NavState::default();
        let once = start.toggled();
        assert!(once.is_open);
        assert_eq!(once.toggled(), start);
    }

    #[test]
    fn aria_mirrors_state_at_each_step() {
        let closed = NavState::default();
        assert_eq!(closed.aria_expanded(), "false");
        assert_eq!(closed.aria_hidden(), "true");

        let open = closed.toggled();
        assert_eq!(open.aria_expanded(), "true");
        assert_eq!(open.aria_hidden(), "false");
    }

    #[test]
    fn close_is_idempotent() {
        let open = NavState { is_open: true };
        assert!(!open.closed().is_open);
        assert!(!open.closed().closed().is_open);
    }
}
