/// Header switches to its "scrolled" treatment past this offset.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Probe offset added to the scroll position when matching sections,
/// compensating for the sticky header height.
pub const SECTION_LOOKAHEAD: f64 = 120.0;

/// Vertical extent of one `<section id=…>`, captured from layout at event time.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scrolled_past_threshold: bool,
    pub active_section_id: Option<String>,
}

impl ScrollState {
    /// Recomputes the full scroll-derived state. Sections are tested in
    /// document order and the first one containing the probe wins, matching
    /// `[top, top + height)` so adjacent sections never both claim it.
    pub fn compute(scroll_y: f64, sections: &[SectionBounds]) -> Self {
        let probe = scroll_y + SECTION_LOOKAHEAD;
        let active_section_id = sections
            .iter()
            .find(|s| probe >= s.top && probe < s.top + s.height)
            .map(|s| s.id.clone());

        Self {
            scrolled_past_threshold: scroll_y > HEADER_SCROLL_THRESHOLD,
            active_section_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "home".into(), top: 0.0, height: 600.0 },
            SectionBounds { id: "services".into(), top: 600.0, height: 800.0 },
            SectionBounds { id: "contact".into(), top: 1400.0, height: 500.0 },
        ]
    }

    #[test]
    fn threshold_is_strictly_greater_than_50() {
        assert!(!ScrollState::compute(0.0, &[]).scrolled_past_threshold);
        assert!(!ScrollState::compute(50.0, &[]).scrolled_past_threshold);
        assert!(ScrollState::compute(50.5, &[]).scrolled_past_threshold);
        assert!(ScrollState::compute(5000.0, &[]).scrolled_past_threshold);
    }

    #[test]
    fn active_section_contains_probe_offset() {
        // probe = scroll + 120
        let s = sections();
        assert_eq!(ScrollState::compute(0.0, &s).active_section_id.as_deref(), Some("home"));
        assert_eq!(ScrollState::compute(479.0, &s).active_section_id.as_deref(), Some("home"));
        assert_eq!(ScrollState::compute(480.0, &s).active_section_id.as_deref(), Some("services"));
        assert_eq!(ScrollState::compute(1300.0, &s).active_section_id.as_deref(), Some("contact"));
    }

    #[test]
    fn no_section_contains_probe() {
        let s = sections();
        // Past the end of the last section.
        assert_eq!(ScrollState::compute(1900.0, &s).active_section_id, None);
        assert_eq!(ScrollState::compute(0.0, &[]).active_section_id, None);
    }

    #[test]
    fn first_match_wins_in_document_order() {
        let overlapping = vec![
            SectionBounds { id: "a".into(), top: 0.0, height: 1000.0 },
            SectionBounds { id: "b".into(), top: 0.0, height: 1000.0 },
        ];
        assert_eq!(
            ScrollState::compute(100.0, &overlapping).active_section_id.as_deref(),
            Some("a")
        );
    }
}
