//! Page view state.
//!
//! The page owns exactly one piece of state: whether the coaching
//! application form is shown. It starts hidden and moves to visible on the
//! first Apply action. There is no transition back.

/// Visibility of the application form section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Hidden,
    Visible,
}

impl FormState {
    /// Apply action. Returns `true` only when this call revealed the form.
    ///
    /// Shaped for `maybe_update`, so a repeated Apply does not notify
    /// anything subscribed to the signal.
    pub fn apply(&mut self) -> bool {
        match self {
            FormState::Hidden => {
                *self = FormState::Visible;
                true
            }
            FormState::Visible => false,
        }
    }

    pub fn is_visible(self) -> bool {
        self == FormState::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(FormState::default(), FormState::Hidden);
        assert!(!FormState::default().is_visible());
    }

    #[test]
    fn first_apply_reveals() {
        let mut state = FormState::default();
        assert!(state.apply());
        assert!(state.is_visible());
    }

    #[test]
    fn later_applies_are_no_ops() {
        let mut state = FormState::Hidden;
        state.apply();
        for _ in 0..3 {
            assert!(!state.apply());
            assert_eq!(state, FormState::Visible);
        }
    }
}
