use crate::utils::error::{PlayWheError, Result};
use std::str::FromStr;

pub const HOME_PATH: &str = "/";
pub const RESULTS_PATH: &str = "/results/";
pub const HIDING_MARKS_PATH: &str = "/hiding-marks/";
pub const MARK_FREQUENCIES_PATH: &str = "/mark-frequencies-by-year-month/";

/// CSS class applied to the highlighted nav entry.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationSection {
    Home,
    Results,
    HidingMarks,
    MarkFrequencies,
    /// Drop-down grouping the results and statistics pages.
    Tools,
}

impl NavigationSection {
    pub fn name(self) -> &'static str {
        match self {
            NavigationSection::Home => "home",
            NavigationSection::Results => "results",
            NavigationSection::HidingMarks => "hiding-marks",
            NavigationSection::MarkFrequencies => "mark-frequencies",
            NavigationSection::Tools => "tools",
        }
    }

    pub fn paths(self) -> &'static [&'static str] {
        match self {
            NavigationSection::Home => &[HOME_PATH],
            NavigationSection::Results => &[RESULTS_PATH],
            NavigationSection::HidingMarks => &[HIDING_MARKS_PATH],
            NavigationSection::MarkFrequencies => &[MARK_FREQUENCIES_PATH],
            NavigationSection::Tools => &[RESULTS_PATH, HIDING_MARKS_PATH, MARK_FREQUENCIES_PATH],
        }
    }
}

impl FromStr for NavigationSection {
    type Err = PlayWheError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "home" => Ok(NavigationSection::Home),
            "results" => Ok(NavigationSection::Results),
            "hiding-marks" => Ok(NavigationSection::HidingMarks),
            "mark-frequencies" => Ok(NavigationSection::MarkFrequencies),
            "tools" => Ok(NavigationSection::Tools),
            other => Err(PlayWheError::InvalidConfigValueError {
                field: "navigation section".to_string(),
                value: other.to_string(),
                reason: "Expected home, results, hiding-marks, mark-frequencies or tools"
                    .to_string(),
            }),
        }
    }
}

/// Exact comparison only: `/results` and `/results/` are different pages.
pub fn is_active(section: NavigationSection, current_path: &str) -> bool {
    section.paths().iter().any(|path| *path == current_path)
}

/// Section names that do not exist are never active.
pub fn is_active_by_name(name: &str, current_path: &str) -> bool {
    name.parse::<NavigationSection>()
        .map(|section| is_active(section, current_path))
        .unwrap_or(false)
}

pub fn active_class(section: NavigationSection, current_path: &str) -> &'static str {
    if is_active(section, current_path) {
        ACTIVE_CLASS
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_requires_trailing_slash() {
        assert!(is_active(NavigationSection::Results, "/results/"));
        assert!(!is_active(NavigationSection::Results, "/results"));
    }

    #[test]
    fn test_tools_covers_its_pages() {
        assert!(is_active(NavigationSection::Tools, "/hiding-marks/"));
        assert!(is_active(NavigationSection::Tools, "/results/"));
        assert!(is_active(NavigationSection::Tools, "/mark-frequencies-by-year-month/"));
        assert!(!is_active(NavigationSection::Tools, "/"));
    }

    #[test]
    fn test_home_is_root_only() {
        assert!(is_active(NavigationSection::Home, "/"));
        assert!(!is_active(NavigationSection::Home, ""));
        assert!(!is_active(NavigationSection::Home, "/results/"));
    }

    #[test]
    fn test_mark_frequencies_path() {
        assert!(is_active(
            NavigationSection::MarkFrequencies,
            "/mark-frequencies-by-year-month/"
        ));
        assert!(!is_active(NavigationSection::MarkFrequencies, "/mark-frequencies/"));
    }

    #[test]
    fn test_names_round_trip() {
        for section in [
            NavigationSection::Home,
            NavigationSection::Results,
            NavigationSection::HidingMarks,
            NavigationSection::MarkFrequencies,
            NavigationSection::Tools,
        ] {
            assert_eq!(section.name().parse::<NavigationSection>().unwrap(), section);
        }
        assert!("about".parse::<NavigationSection>().is_err());
    }

    #[test]
    fn test_active_class_and_unknown_names() {
        assert_eq!(active_class(NavigationSection::HidingMarks, "/hiding-marks/"), "active");
        assert_eq!(active_class(NavigationSection::HidingMarks, "/"), "");
        assert!(is_active_by_name("tools", "/results/"));
        assert!(!is_active_by_name("about", "/"));
    }
}
