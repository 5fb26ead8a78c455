/// Vertical scroll offset past which the nav bar switches to its solid
/// backdrop treatment.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Distance from the top of the viewport of the probe line used to decide
/// which section the reader is currently in.
pub const SECTION_PROBE_PX: f64 = 150.0;

/// Page sections in top-to-bottom document order. The order matters: the
/// scroll spy picks the first section whose box contains the probe line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// The DOM element id the section is rendered under.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

/// Rendered bounding box of a section, in viewport coordinates.
#[derive(Clone, Copy, Debug)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Picks the active section: the first one (in document order) whose box
/// straddles the probe line. Falls back to the first section when the probe
/// is in a gap, so exactly one section is always active.
pub fn active_section(bounds: &[SectionBounds]) -> Section {
    bounds
        .iter()
        .find(|b| b.top <= SECTION_PROBE_PX && b.bottom >= SECTION_PROBE_PX)
        .map(|b| b.section)
        .unwrap_or(Section::Home)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked_bounds(offset: f64) -> Vec<SectionBounds> {
        // Each section is 600px tall, stacked without gaps, shifted by the
        // scroll offset the way getBoundingClientRect reports them.
        Section::ALL
            .iter()
            .enumerate()
            .map(|(index, &section)| SectionBounds {
                section,
                top: index as f64 * 600.0 - offset,
                bottom: (index as f64 + 1.0) * 600.0 - offset,
            })
            .collect()
    }

    #[test]
    fn probe_at_page_top_selects_home() {
        assert_eq!(active_section(&stacked_bounds(0.0)), Section::Home);
    }

    #[test]
    fn probe_inside_third_section_selects_experience() {
        // Scrolled so the experience block spans the probe line.
        assert_eq!(active_section(&stacked_bounds(1_300.0)), Section::Experience);
    }

    #[test]
    fn first_matching_section_wins_when_boxes_overlap() {
        let bounds = [
            SectionBounds {
                section: Section::Home,
                top: 0.0,
                bottom: 400.0,
            },
            SectionBounds {
                section: Section::About,
                top: 100.0,
                bottom: 900.0,
            },
        ];
        assert_eq!(active_section(&bounds), Section::Home);
    }

    #[test]
    fn probe_outside_every_section_falls_back_to_home() {
        let bounds = [SectionBounds {
            section: Section::Contact,
            top: 2_000.0,
            bottom: 2_600.0,
        }];
        assert_eq!(active_section(&bounds), Section::Home);
        assert_eq!(active_section(&[]), Section::Home);
    }

    #[test]
    fn probe_on_section_edges_still_matches() {
        let bounds = [SectionBounds {
            section: Section::Skills,
            top: SECTION_PROBE_PX,
            bottom: SECTION_PROBE_PX,
        }];
        assert_eq!(active_section(&bounds), Section::Skills);
    }

    #[test]
    fn scrolled_flag_flips_strictly_past_the_threshold() {
        assert!(!is_scrolled(49.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }
}
