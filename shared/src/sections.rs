use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::SCROLL_SPY_THRESHOLD;

/// Page sections in document order. The derived `Ord` follows declaration order,
/// which is also top-to-bottom order on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Services,
    Projects,
    Skills,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Services,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Services => "services",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|id| id.as_str() == s).ok_or(())
    }
}

/// One IntersectionObserver entry, reduced to what the spy needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionVisibility {
    pub element_id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Observer thresholds for the spy: every tenth from 0 to 1, so ratios keep
/// flowing while a section grows or shrinks instead of only at the cutoff.
pub fn observer_thresholds() -> Vec<f64> {
    (0..=10).map(|step| f64::from(step) / 10.0).collect()
}

// Observers report ratios a hair under the configured threshold at the crossing.
const RATIO_EPSILON: f64 = 1e-3;

/// Tracks which sections are past the visibility threshold and picks the active one.
///
/// The active section is the candidate with the largest intersection ratio. Equal
/// ratios go to the topmost section. When nothing is a candidate the previous
/// answer stands, so the active section is always a declared id.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    threshold: f64,
    visible: BTreeMap<SectionId, f64>,
    active: SectionId,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(SCROLL_SPY_THRESHOLD)
    }
}

impl ScrollSpy {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: BTreeMap::new(),
            active: SectionId::default(),
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Applies a batch of observer entries and returns the (possibly unchanged)
    /// active section.
    pub fn observe<'a, I>(&mut self, entries: I) -> SectionId
    where
        I: IntoIterator<Item = &'a SectionVisibility>,
    {
        for entry in entries {
            let Ok(id) = entry.element_id.parse::<SectionId>() else {
                log::debug!("scroll spy ignoring unknown element `{}`", entry.element_id);
                continue;
            };
            if entry.is_intersecting && entry.ratio + RATIO_EPSILON >= self.threshold {
                self.visible.insert(id, entry.ratio);
            } else {
                self.visible.remove(&id);
            }
        }

        if let Some(best) = self.best_candidate() {
            self.active = best;
        }
        self.active
    }

    fn best_candidate(&self) -> Option<SectionId> {
        // BTreeMap iterates top-to-bottom; only a strictly larger ratio displaces
        // an earlier section.
        self.visible
            .iter()
            .fold(None, |best: Option<(SectionId, f64)>, (&id, &ratio)| match best {
                Some((_, best_ratio)) if ratio <= best_ratio + RATIO_EPSILON => best,
                _ => Some((id, ratio)),
            })
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, is_intersecting: bool, ratio: f64) -> SectionVisibility {
        SectionVisibility {
            element_id: id.to_string(),
            is_intersecting,
            ratio,
        }
    }

    #[test]
    fn test_starts_on_hero() {
        assert_eq!(ScrollSpy::default().active(), SectionId::Hero);
    }

    #[test]
    fn test_single_section_crossing_threshold_becomes_active() {
        let mut spy = ScrollSpy::default();
        let active = spy.observe(&[entry("projects", true, 0.31)]);
        assert_eq!(active, SectionId::Projects);
    }

    #[test]
    fn test_largest_ratio_wins_regardless_of_entry_order() {
        let mut spy = ScrollSpy::default();
        let active = spy.observe(&[entry("about", true, 0.9), entry("services", true, 0.4)]);
        assert_eq!(active, SectionId::About);

        let mut spy = ScrollSpy::default();
        let active = spy.observe(&[entry("services", true, 0.4), entry("about", true, 0.9)]);
        assert_eq!(active, SectionId::About);
    }

    #[test]
    fn test_equal_ratios_pick_topmost() {
        let mut spy = ScrollSpy::default();
        let active = spy.observe(&[entry("contact", true, 0.5), entry("skills", true, 0.5)]);
        assert_eq!(active, SectionId::Skills);
    }

    #[test]
    fn test_ratio_just_under_threshold_still_counts() {
        let mut spy = ScrollSpy::default();
        assert_eq!(spy.observe(&[entry("about", true, 0.2995)]), SectionId::About);
    }

    #[test]
    fn test_leaving_section_hands_over_to_remaining_candidate() {
        let mut spy = ScrollSpy::default();
        spy.observe(&[entry("about", true, 0.8), entry("services", true, 0.35)]);
        let active = spy.observe(&[entry("about", false, 0.0)]);
        assert_eq!(active, SectionId::Services);
    }

    #[test]
    fn test_no_candidates_keeps_previous_section() {
        let mut spy = ScrollSpy::default();
        spy.observe(&[entry("skills", true, 0.6)]);
        let active = spy.observe(&[entry("skills", true, 0.1)]);
        assert_eq!(active, SectionId::Skills);
    }

    #[test]
    fn test_growing_section_beats_later_entrant_with_lower_ratio() {
        let mut spy = ScrollSpy::default();
        spy.observe(&[entry("about", true, 0.31)]);
        spy.observe(&[entry("about", true, 0.6)]);
        spy.observe(&[entry("about", true, 1.0)]);
        let active = spy.observe(&[entry("services", true, 0.32)]);
        assert_eq!(active, SectionId::About);
    }

    #[test]
    fn test_shrinking_section_hands_over_once_neighbour_is_larger() {
        let mut spy = ScrollSpy::default();
        spy.observe(&[entry("about", true, 1.0), entry("services", true, 0.32)]);
        let active = spy.observe(&[entry("about", true, 0.4), entry("services", true, 0.7)]);
        assert_eq!(active, SectionId::Services);
    }

    #[test]
    fn test_observer_thresholds_span_full_range_and_include_cutoff() {
        let steps = observer_thresholds();
        assert_eq!(steps.first(), Some(&0.0));
        assert_eq!(steps.last(), Some(&1.0));
        assert!(steps.iter().any(|step| (step - SCROLL_SPY_THRESHOLD).abs() < 1e-9));
        assert!(steps.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut spy = ScrollSpy::default();
        assert_eq!(spy.observe(&[entry("pricing", true, 1.0)]), SectionId::Hero);
    }

    #[test]
    fn test_section_ids_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
    }
}
