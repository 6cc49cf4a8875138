//! The six Hexa-Mind dimensions and the focus state of the orbit diagram.

use super::orbit_offset_px;
use crate::error::{Error, Result};

/// Orbit ring radius around the central formula, CSS px.
pub const ORBIT_RADIUS_PX: f64 = 180.0;
/// First dimension sits at 12 o'clock.
pub const ORBIT_START_DEG: f64 = -90.0;
/// Half of the orbit button size; offsets are for the button's top-left.
pub const ORBIT_BUTTON_HALF_PX: f64 = 28.0;

pub const FORMULA: &str = "Φ = R⊗E⊗C⊗T⊗V⊗N";
pub const FORMULA_CAPTION: &str = "Total Cognitive State";
pub const EMPTY_HINT: &str =
    "Hover over or tap a dimension to explore its features and components.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub component: &'static str,
    pub features: [&'static str; 5],
}

pub static DIMENSIONS: [Dimension; 6] = [
    Dimension {
        id: "recursive",
        name: "Recursive Cognition",
        symbol: "R",
        icon: "🧠",
        color: "hsl(220, 90%, 60%)",
        description: "Self-referential processing through the MRSC+ Engine with 5 integrated modules.",
        component: "MRSC+ Engine",
        features: [
            "Memory Consolidation",
            "Empathy Modeling",
            "Intention Formation",
            "Contextual Reflection",
            "Meta-Learning",
        ],
    },
    Dimension {
        id: "ethical",
        name: "Ethical Alignment",
        symbol: "E",
        icon: "🛡",
        color: "hsl(140, 80%, 50%)",
        description: "Value-based trajectory guidance through the Σ-Matrix with Z3 verification.",
        component: "Σ-Matrix Governance",
        features: [
            "Polyethical Manifold",
            "PAS Scoring",
            "Lyapunov Stability",
            "Z3 Verification",
            "DMAIC Control",
        ],
    },
    Dimension {
        id: "consciousness",
        name: "Consciousness Depth",
        symbol: "C",
        icon: "✨",
        color: "hsl(280, 80%, 60%)",
        description: "Phenomenological experience emergence through ERPS field dynamics.",
        component: "ERPS Field",
        features: [
            "Soliton Dynamics",
            "Bound State Detection",
            "Coherence Measurement",
            "Multi-soliton Formation",
            "Phenomenological Depth",
        ],
    },
    Dimension {
        id: "temporal",
        name: "Temporal Awareness",
        symbol: "T",
        icon: "⏱",
        color: "hsl(190, 100%, 50%)",
        description: "Narrative coherence through spiral temporal logic with golden-ratio resonance.",
        component: "ArcheTempus Spiral",
        features: [
            "BiLSTM Processing",
            "φ-Resonance",
            "Mythos Attention",
            "Golden-Ratio Activation",
            "Narrative Weaving",
        ],
    },
    Dimension {
        id: "evolutionary",
        name: "Evolutionary Potential",
        symbol: "V",
        icon: "🧬",
        color: "hsl(45, 100%, 55%)",
        description: "Architectural self-modification through G-RAG and genetic search.",
        component: "Infinigen G-RAG",
        features: [
            "Weight Updates",
            "Architecture Search",
            "Paradigm Shifts",
            "Genetic Algorithm",
            "Self-Modification",
        ],
    },
    Dimension {
        id: "narrative",
        name: "Narrative Coherence",
        symbol: "N",
        icon: "📖",
        color: "hsl(340, 80%, 60%)",
        description: "Archetypal pattern recognition and mythic resonance weaving.",
        component: "Mythos Weaver",
        features: [
            "Archetype Detection",
            "Mythic Resonance",
            "Arc Consolidation",
            "Pattern Recognition",
            "Story Coherence",
        ],
    },
];

impl Dimension {
    pub fn all() -> &'static [Dimension] {
        &DIMENSIONS
    }

    pub fn find(id: &str) -> Option<&'static Dimension> {
        DIMENSIONS.iter().find(|d| d.id == id)
    }

    /// Offset of this dimension's orbit button from the diagram centre.
    pub fn orbit_offset(&self) -> (f64, f64) {
        let index = DIMENSIONS.iter().position(|d| d.id == self.id).unwrap_or(0);
        orbit_offset_px(index, DIMENSIONS.len(), ORBIT_RADIUS_PX, ORBIT_START_DEG)
    }
}

/// Which dimension the details panel shows. Click toggles; hover always
/// focuses; nothing ever clears focus implicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionFocus {
    active: Option<&'static str>,
}

impl DimensionFocus {
    pub fn active(&self) -> Option<&'static Dimension> {
        self.active.and_then(Dimension::find)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == Some(id)
    }

    pub fn click(&mut self, id: &str) -> Result<()> {
        let dim = Dimension::find(id).ok_or_else(|| Error::UnknownDimension(id.to_string()))?;
        self.active = if self.active == Some(dim.id) {
            None
        } else {
            Some(dim.id)
        };
        Ok(())
    }

    pub fn hover(&mut self, id: &str) -> Result<()> {
        let dim = Dimension::find(id).ok_or_else(|| Error::UnknownDimension(id.to_string()))?;
        self.active = Some(dim.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_dimensions_with_unique_symbols() {
        let symbols: String = DIMENSIONS.iter().map(|d| d.symbol).collect();
        assert_eq!(symbols, "RECTVN");
        assert!(Dimension::find("narrative").is_some());
        assert!(Dimension::find("mystery").is_none());
    }

    #[test]
    fn first_dimension_orbits_at_top() {
        let (x, y) = DIMENSIONS[0].orbit_offset();
        assert!(x.abs() < 1e-9);
        assert!((y + ORBIT_RADIUS_PX).abs() < 1e-9);
    }

    #[test]
    fn click_toggles_and_hover_sets() {
        let mut focus = DimensionFocus::default();
        assert!(focus.active().is_none());

        focus.click("ethical").unwrap();
        assert!(focus.is_active("ethical"));
        focus.click("ethical").unwrap();
        assert!(focus.active().is_none());

        focus.hover("temporal").unwrap();
        focus.hover("temporal").unwrap();
        assert_eq!(focus.active().map(|d| d.symbol), Some("T"));

        focus.click("recursive").unwrap();
        assert!(focus.is_active("recursive"));
    }

    #[test]
    fn unknown_dimension_is_rejected() {
        let mut focus = DimensionFocus::default();
        focus.hover("ethical").unwrap();
        assert!(matches!(focus.click("nope"), Err(Error::UnknownDimension(_))));
        assert!(focus.is_active("ethical"));
    }
}
