//! Logo rendering state.
//!
//! The header logo is an image until it fails to load once; from then on
//! the initials are shown instead, for the rest of the page's life.

pub const LOGO_SRC: &str = "/logo.svg";
pub const LOGO_ALT: &str = "Stage Ready logo";
pub const FALLBACK_INITIALS: &str = "SR";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogoState {
    #[default]
    Image,
    Fallback,
}

impl LogoState {
    /// Record a load failure. There is no way back to [`LogoState::Image`].
    pub fn fail(&mut self) {
        *self = LogoState::Fallback;
    }

    pub fn shows_image(self) -> bool {
        self == LogoState::Image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_permanent() {
        let mut logo = LogoState::default();
        assert!(logo.shows_image());
        logo.fail();
        assert_eq!(logo, LogoState::Fallback);
        logo.fail();
        assert!(!logo.shows_image());
    }
}
