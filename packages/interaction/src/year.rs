//! Year filter.
//!
//! The slider runs 2013..=2022; 2013 is the "all years" sentinel. On every
//! input the handler strips the year classes and the `all` class from every
//! shape, then re-applies exactly one of them. The label row mirrors the
//! slider: the "All" label is active exactly when the sentinel is selected,
//! a year label exactly when its year is.

use incident_map_render::Scene;

/// Slider value meaning "all years".
pub const ALL_YEARS_SENTINEL: u16 = 2013;

/// Largest selectable year.
pub const YEAR_MAX: u16 = 2022;

/// Class applied when all years are selected.
pub const ALL_CLASS: &str = "all";

/// The per-year classes, `year-2014` through `year-2022`.
#[must_use]
pub fn year_classes() -> Vec<String> {
    (ALL_YEARS_SENTINEL + 1..=YEAR_MAX)
        .map(|year| format!("year-{year}"))
        .collect()
}

/// Applies the year selection to every shape.
///
/// Removing before re-applying makes the handler idempotent: selecting the
/// same year twice leaves the same class set as selecting it once.
pub fn apply_year_filter(scene: &mut Scene, year: u16) {
    let year_classes = year_classes();

    for shape in &mut scene.shapes {
        shape.classes.remove(ALL_CLASS);
        for class in &year_classes {
            shape.classes.remove(class);
        }

        if year == ALL_YEARS_SENTINEL {
            shape.classes.insert(ALL_CLASS.to_owned());
        } else {
            shape.classes.insert(format!("year-{year}"));
        }
    }
}

/// One label under the slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearLabel {
    /// Label text ("All" or a year).
    pub text: String,
    /// Whether this is the "All" label.
    pub is_all: bool,
    /// Whether the label is currently highlighted.
    pub active: bool,
}

/// The label row under the slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    /// Labels in display order: "All" first, then the years.
    pub labels: Vec<YearLabel>,
}

impl Default for LabelRow {
    fn default() -> Self {
        let mut labels = vec![YearLabel {
            text: "All".to_owned(),
            is_all: true,
            active: false,
        }];
        labels.extend((ALL_YEARS_SENTINEL + 1..=YEAR_MAX).map(|year| YearLabel {
            text: year.to_string(),
            is_all: false,
            active: false,
        }));

        Self { labels }
    }
}

impl LabelRow {
    /// Highlights the label matching the slider value: the "All" label for
    /// the sentinel, the matching year label otherwise.
    pub fn select(&mut self, year: u16) {
        let year_text = year.to_string();

        for label in &mut self.labels {
            label.active = if year == ALL_YEARS_SENTINEL {
                label.is_all
            } else {
                !label.is_all && label.text == year_text
            };
        }
    }

    /// The currently highlighted label, if any.
    #[must_use]
    pub fn active_label(&self) -> Option<&YearLabel> {
        self.labels.iter().find(|label| label.active)
    }
}
