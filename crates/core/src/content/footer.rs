//! Footer copy and link groups.

use crate::nav::Anchor;

pub const BLURB: &str = "The Hexa-Mind Model for Artificial Consciousness. A synthesis of five research threads into a unified cognitive architecture with mathematical guarantees.";
pub const COPYRIGHT: &str = "© 2026 Unified Research Consortium. Open source under MIT License.";
pub const BUILT_WITH: &str = "Built with ♥ for the future of AI";
pub const QUOTE: &str = "The whole is greater than the sum of its parts.";
pub const QUOTE_AUTHOR: &str = "Aristotle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl FooterLink {
    /// In-page target, if the link points at a section.
    pub fn anchor(&self) -> Option<Anchor> {
        Anchor::from_href(self.href)
    }

    /// Fragment links (including bare `#`) never navigate away.
    pub fn is_in_page(&self) -> bool {
        self.href.starts_with('#')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [FooterLink],
    /// Render each link with an external-link marker.
    pub external: bool,
}

const fn link(label: &'static str, href: &'static str) -> FooterLink {
    FooterLink { label, href }
}

pub static LINK_GROUPS: [LinkGroup; 3] = [
    LinkGroup {
        title: "Navigation",
        links: &[
            link("Hexa-Mind", "#hexa-mind"),
            link("Pipeline", "#pipeline"),
            link("Consciousness", "#consciousness"),
            link("Theorems", "#theorems"),
            link("Research", "#research"),
        ],
        external: false,
    },
    LinkGroup {
        title: "Resources",
        links: &[
            link("Documentation", "#"),
            link("API Reference", "#"),
            link("GitHub Repository", "#"),
            link("Research Paper", "#research"),
        ],
        external: false,
    },
    LinkGroup {
        title: "Community",
        links: &[
            link("Discord", "#"),
            link("Twitter", "#"),
            link("Forum", "#"),
            link("Newsletter", "#"),
        ],
        external: true,
    },
];

pub static SOCIAL_LINKS: [FooterLink; 3] = [
    link("GitHub", "#"),
    link("Twitter", "#"),
    link("Email", "#"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_group_mirrors_nav_bar() {
        let anchors: Vec<Anchor> = LINK_GROUPS[0]
            .links
            .iter()
            .filter_map(FooterLink::anchor)
            .collect();
        assert_eq!(anchors, Anchor::all());
    }

    #[test]
    fn placeholder_links_have_no_target() {
        let docs = LINK_GROUPS[1].links[0];
        assert!(docs.is_in_page());
        assert_eq!(docs.anchor(), None);
        assert_eq!(LINK_GROUPS[1].links[3].anchor(), Some(Anchor::Research));
    }
}
