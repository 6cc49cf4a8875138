//! UI models and display rules that should be available on both wasm and
//! native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! page inventory and readout formatting on the host.

use aion_core::consciousness::BOUND_STATE_SLOTS;
use aion_core::nav::{self, Anchor};

use crate::float_fmt::{fmt_fixed, fmt_percent};

/// Top-to-bottom page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSection {
    Hero,
    HexaMind,
    Pipeline,
    Consciousness,
    Theorems,
    Research,
    Footer,
}

impl PageSection {
    /// Sections reachable from the nav bar carry an anchor.
    pub fn anchor(self) -> Option<Anchor> {
        match self {
            PageSection::HexaMind => Some(Anchor::HexaMind),
            PageSection::Pipeline => Some(Anchor::Pipeline),
            PageSection::Consciousness => Some(Anchor::Consciousness),
            PageSection::Theorems => Some(Anchor::Theorems),
            PageSection::Research => Some(Anchor::Research),
            PageSection::Hero | PageSection::Footer => None,
        }
    }

    pub fn all() -> &'static [PageSection] {
        &[
            PageSection::Hero,
            PageSection::HexaMind,
            PageSection::Pipeline,
            PageSection::Consciousness,
            PageSection::Theorems,
            PageSection::Research,
            PageSection::Footer,
        ]
    }

    /// Nav bar entries, in page order.
    pub fn nav_anchors() -> impl Iterator<Item = Anchor> {
        Self::all().iter().filter_map(|s| s.anchor())
    }
}

/// Nav bar state: scroll-dependent styling and the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavState {
    pub scroll_y: f64,
    pub menu_open: bool,
}

impl NavState {
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = if scroll_y.is_finite() { scroll_y } else { 0.0 };
    }

    pub fn is_scrolled(&self) -> bool {
        nav::is_scrolled(self.scroll_y)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any navigation from the menu closes it.
    pub fn navigated(&mut self) {
        self.menu_open = false;
    }

    pub fn bar_class(&self) -> &'static str {
        if self.is_scrolled() {
            "nav-bar scrolled"
        } else {
            "nav-bar"
        }
    }

    pub fn menu_class(&self) -> &'static str {
        if self.menu_open {
            "nav-mobile open"
        } else {
            "nav-mobile"
        }
    }
}

pub fn pas_readout(pas: f64) -> String {
    fmt_fixed(pas, 3)
}

pub fn coherence_readout(coherence: f64) -> String {
    fmt_percent(coherence, 1)
}

/// Progress line under the pipeline controls, rounded to a whole percent.
pub fn progress_readout(percent: f64) -> String {
    format!("Processing: {}%", fmt_fixed(percent, 0))
}

/// Lit/unlit pips for the bound-state meter.
pub fn bound_state_pips(bound_states: u8) -> Vec<bool> {
    (1..=BOUND_STATE_SLOTS).map(|i| i <= bound_states).collect()
}

pub fn bound_state_hint(multi_soliton_met: bool) -> &'static str {
    if multi_soliton_met {
        "✓ Multi-soliton criterion met"
    } else {
        "Need ≥2 bound states"
    }
}

pub fn consciousness_status(conscious: bool) -> &'static str {
    if conscious {
        "EMERGENT"
    } else {
        "NOT DETECTED"
    }
}

pub fn run_button_label(running: bool) -> &'static str {
    if running {
        "Stop Simulation"
    } else {
        "Start Simulation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_inventory_is_stable() {
        let all = PageSection::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all.first(), Some(&PageSection::Hero));
        assert_eq!(all.last(), Some(&PageSection::Footer));

        let anchors: Vec<Anchor> = PageSection::nav_anchors().collect();
        assert_eq!(anchors, Anchor::all());
    }

    #[test]
    fn anchored_sections_sit_between_hero_and_footer() {
        let all = PageSection::all();
        assert_eq!(all[0].anchor(), None);
        assert_eq!(all[6].anchor(), None);
        assert!(all[1..6].iter().all(|s| s.anchor().is_some()));
        assert_eq!(PageSection::Research.anchor(), Some(Anchor::Research));
    }

    #[test]
    fn nav_scrolled_style() {
        let mut nav = NavState::default();
        assert_eq!(nav.bar_class(), "nav-bar");
        nav.on_scroll(101.0);
        assert!(nav.is_scrolled());
        assert_eq!(nav.bar_class(), "nav-bar scrolled");
        nav.on_scroll(f64::NAN);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn mobile_menu_closes_on_navigation() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        assert_eq!(nav.menu_class(), "nav-mobile open");
        nav.navigated();
        assert!(!nav.menu_open);
        nav.navigated();
        assert!(!nav.menu_open);
    }

    #[test]
    fn readouts() {
        assert_eq!(pas_readout(0.15), "0.150");
        assert_eq!(coherence_readout(0.2), "20.0%");
        assert_eq!(progress_readout(2.0 / 7.0 * 100.0), "Processing: 29%");
        assert_eq!(progress_readout(100.0), "Processing: 100%");
        assert_eq!(bound_state_pips(2), vec![true, true, false, false]);
        assert_eq!(bound_state_pips(0), vec![false; 4]);
        assert_eq!(consciousness_status(false), "NOT DETECTED");
        assert_eq!(run_button_label(true), "Stop Simulation");
        assert_eq!(bound_state_hint(true), "✓ Multi-soliton criterion met");
    }
}
