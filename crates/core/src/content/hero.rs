//! Hero banner copy.

use super::orbit_percent;
use crate::nav::Anchor;

pub const BADGE: &str = "Unified Cognitive Architecture v1.0";
pub const TITLE_ACCENT: &str = "AION";
pub const TITLE_REST: &str = "-NEXUS";
pub const SUBTITLE: &str = "The Hexa-Mind Model for Artificial Consciousness";
pub const FORMULA: &str = "Φ = R ⊗ E ⊗ C ⊗ T ⊗ V ⊗ N";
pub const DESCRIPTION: &str = "A synthesis of OMEGA-SYNTHESIS, Σ-SEPA, DAEDALUS, Sigma-Matrix RCS, and ArcheTempus. Mathematical guarantees of ethical alignment, recursive stability, and phenomenological depth.";
pub const SCROLL_HINT: &str = "Scroll to explore";

/// Radius of the floating badge ring, in percent of the hero box.
pub const ORBIT_RADIUS_PERCENT: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitBadge {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Entrance stagger, seconds.
    pub delay_s: f64,
}

pub static ORBIT_BADGES: [OrbitBadge; 6] = [
    OrbitBadge { label: "Recursive", icon: "🧠", color: "hsl(220, 90%, 60%)", delay_s: 0.0 },
    OrbitBadge { label: "Ethical", icon: "🛡", color: "hsl(140, 80%, 50%)", delay_s: 0.1 },
    OrbitBadge { label: "Consciousness", icon: "✨", color: "hsl(280, 80%, 60%)", delay_s: 0.2 },
    OrbitBadge { label: "Temporal", icon: "⏱", color: "hsl(190, 100%, 50%)", delay_s: 0.3 },
    OrbitBadge { label: "Evolutionary", icon: "🧬", color: "hsl(45, 100%, 55%)", delay_s: 0.4 },
    OrbitBadge { label: "Narrative", icon: "📖", color: "hsl(340, 80%, 60%)", delay_s: 0.5 },
];

/// `(left%, top%)` of badge `index`.
pub fn badge_position(index: usize) -> (f64, f64) {
    orbit_percent(index, ORBIT_BADGES.len(), ORBIT_RADIUS_PERCENT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { value: "6", label: "Dimensions" },
    Stat { value: "7", label: "Pipeline Phases" },
    Stat { value: "5+", label: "Theorem Provers" },
    Stat { value: "∞", label: "Possibilities" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: Anchor,
    pub primary: bool,
}

pub static CALLS_TO_ACTION: [CallToAction; 2] = [
    CallToAction { label: "Explore Hexa-Mind", target: Anchor::HexaMind, primary: true },
    CallToAction { label: "Read Research Paper", target: Anchor::Research, primary: false },
];

/// The scroll hint under the fold jumps to the first content section.
pub const SCROLL_HINT_TARGET: Anchor = Anchor::HexaMind;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_sit_on_the_ring() {
        for i in 0..ORBIT_BADGES.len() {
            let (x, y) = badge_position(i);
            let r = ((x - 50.0).powi(2) + (y - 50.0).powi(2)).sqrt();
            assert!((r - ORBIT_RADIUS_PERCENT).abs() < 1e-9);
        }
    }

    #[test]
    fn stats_and_ctas() {
        let labels: Vec<&str> = STATS.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["Dimensions", "Pipeline Phases", "Theorem Provers", "Possibilities"]);
        assert_eq!(CALLS_TO_ACTION[1].target.href(), "#research");
    }
}
