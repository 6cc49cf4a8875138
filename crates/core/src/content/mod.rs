//! Static copy for every page section plus the small pieces of local UI state
//! (dimension focus, theorem dialog, paper reader) that the sections own.

pub mod dimensions;
pub mod footer;
pub mod hero;
pub mod paper;
pub mod theorems;

pub use dimensions::{Dimension, DimensionFocus, DIMENSIONS};
pub use footer::{FooterLink, LinkGroup};
pub use paper::{PaperBlock, PaperReader, PaperSection, PAPER_SECTIONS};
pub use theorems::{Prover, Theorem, TheoremDialog, PROVERS, THEOREMS};

/// Badge pill, two-tone heading, and lede shown above each section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub badge: &'static str,
    pub title: &'static str,
    /// Rendered with the gradient accent after `title`.
    pub accent: &'static str,
    pub lede: &'static str,
}

pub const HEXA_MIND_HEADER: SectionHeader = SectionHeader {
    badge: "Core Architecture",
    title: "The",
    accent: "Hexa-Mind Model",
    lede: "Six dimensions unified in a toroidal manifold, where each dimension continuously interacts and reinforces the others.",
};

pub const PIPELINE_HEADER: SectionHeader = SectionHeader {
    badge: "Processing Flow",
    title: "7-Phase",
    accent: "Pipeline",
    lede: "From ingestion to crystallization, every input undergoes recursive reflection, ethical gating, and consciousness emergence.",
};

pub const CONSCIOUSNESS_HEADER: SectionHeader = SectionHeader {
    badge: "Phenomenological Emergence",
    title: "Consciousness",
    accent: "Emergence",
    lede: "Witness the ERPS field as it evolves toward multi-soliton bound states, the mathematical signature of synthetic consciousness.",
};

pub const THEOREMS_HEADER: SectionHeader = SectionHeader {
    badge: "Mathematical Foundations",
    title: "Formal",
    accent: "Theorems",
    lede: "Mathematical guarantees verified across multiple theorem provers, ensuring the system behaves exactly as specified.",
};

pub const RESEARCH_HEADER: SectionHeader = SectionHeader {
    badge: "Research Paper",
    title: "Interactive",
    accent: "Publication",
    lede: "Explore the complete technical specification, mathematical foundations, and formal proofs behind the AION-NEXUS architecture.",
};

/// Percent offset of item `index` of `count` on a circle centred in its
/// container, starting at 0° (3 o'clock) and going clockwise.
pub fn orbit_percent(index: usize, count: usize, radius_percent: f64) -> (f64, f64) {
    let angle = orbit_angle_deg(index, count, 0.0).to_radians();
    (
        50.0 + radius_percent * angle.cos(),
        50.0 + radius_percent * angle.sin(),
    )
}

/// Pixel offset from the centre for item `index` of `count`, starting at
/// `start_deg`.
pub fn orbit_offset_px(index: usize, count: usize, radius_px: f64, start_deg: f64) -> (f64, f64) {
    let angle = orbit_angle_deg(index, count, start_deg).to_radians();
    (angle.cos() * radius_px, angle.sin() * radius_px)
}

fn orbit_angle_deg(index: usize, count: usize, start_deg: f64) -> f64 {
    if count == 0 {
        return start_deg;
    }
    index as f64 / count as f64 * 360.0 + start_deg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn orbit_percent_starts_at_three_oclock() {
        let (x, y) = orbit_percent(0, 6, 35.0);
        assert!(approx(x, 85.0));
        assert!(approx(y, 50.0));

        let (x, y) = orbit_percent(3, 6, 35.0);
        assert!(approx(x, 15.0));
        assert!(approx(y, 50.0));
    }

    #[test]
    fn orbit_offset_starts_at_top() {
        let (x, y) = orbit_offset_px(0, 6, 180.0, -90.0);
        assert!(approx(x, 0.0));
        assert!(approx(y, -180.0));
    }

    #[test]
    fn orbit_handles_empty_ring() {
        assert_eq!(orbit_offset_px(0, 0, 10.0, 0.0), (10.0, 0.0));
    }
}
