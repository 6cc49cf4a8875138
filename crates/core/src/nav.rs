//! In-page anchors shared by the navigation bar and the footer.

/// Past this many CSS pixels of vertical scroll the nav bar switches to its
/// opaque "scrolled" style.
pub const SCROLLED_THRESHOLD_PX: f64 = 100.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    HexaMind,
    Pipeline,
    Consciousness,
    Theorems,
    Research,
}

impl Anchor {
    /// Element id of the target section.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::HexaMind => "hexa-mind",
            Anchor::Pipeline => "pipeline",
            Anchor::Consciousness => "consciousness",
            Anchor::Theorems => "theorems",
            Anchor::Research => "research",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::HexaMind => "Hexa-Mind",
            Anchor::Pipeline => "Pipeline",
            Anchor::Consciousness => "Consciousness",
            Anchor::Theorems => "Theorems",
            Anchor::Research => "Research",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Nav bar order.
    pub fn all() -> &'static [Anchor] {
        &[
            Anchor::HexaMind,
            Anchor::Pipeline,
            Anchor::Consciousness,
            Anchor::Theorems,
            Anchor::Research,
        ]
    }

    /// Parse `#id`. Bare `#` and external links yield `None`.
    pub fn from_href(href: &str) -> Option<Anchor> {
        let id = href.strip_prefix('#')?;
        Self::all().iter().copied().find(|a| a.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_round_trip() {
        for a in Anchor::all() {
            assert_eq!(Anchor::from_href(&a.href()), Some(*a));
        }
        assert_eq!(Anchor::HexaMind.href(), "#hexa-mind");
    }

    #[test]
    fn non_anchor_hrefs() {
        assert_eq!(Anchor::from_href("#"), None);
        assert_eq!(Anchor::from_href("#nowhere"), None);
        assert_eq!(Anchor::from_href("https://example.org/#research"), None);
    }

    #[test]
    fn scrolled_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
    }
}
