//! Badge rendering model.
//!
//! Pure projection of a cart count onto the two count surfaces: the header
//! badge and the mobile cart link label. `None` means hidden. The DOM side
//! only applies this, so equal counts always yield identical DOM.

/// What the count surfaces should show for a given cart count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeRender {
    /// Header badge text; `None` hides the badge.
    pub badge_text: Option<String>,
    /// Mobile link label text; `None` hides the label.
    pub mobile_text: Option<String>,
}

impl BadgeRender {
    /// Project a cart count. Zero hides both surfaces.
    pub fn from_count(count: u32) -> Self {
        if count > 0 {
            Self {
                badge_text: Some(count.to_string()),
                mobile_text: Some(format!("({count})")),
            }
        } else {
            Self {
                badge_text: None,
                mobile_text: None,
            }
        }
    }

    /// True when the count surfaces are shown.
    pub fn visible(&self) -> bool {
        self.badge_text.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_hides_both_surfaces() {
        let render = BadgeRender::from_count(0);
        assert_eq!(render.badge_text, None);
        assert_eq!(render.mobile_text, None);
        assert!(!render.visible());
    }

    #[test]
    fn test_positive_count_formats_both_surfaces() {
        let render = BadgeRender::from_count(5);
        assert_eq!(render.badge_text.as_deref(), Some("5"));
        assert_eq!(render.mobile_text.as_deref(), Some("(5)"));
        assert!(render.visible());
    }

    #[test]
    fn test_same_count_renders_identically() {
        assert_eq!(BadgeRender::from_count(3), BadgeRender::from_count(3));
    }
}
