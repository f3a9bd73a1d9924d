#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::constants::SEE_MARKS_MAX;

/// The closed set of grade labels a subject can target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeLabel {
    /// Outstanding.
    O,
    /// Excellent.
    #[serde(rename = "A+")]
    APlus,
    /// Very good.
    A,
    /// Good.
    #[serde(rename = "B+")]
    BPlus,
    /// Above average. The default estimate for a fresh subject.
    #[default]
    B,
    /// Average.
    C,
    /// Pass.
    P,
    /// Fail.
    F,
}

impl GradeLabel {
    /// Returns the display spelling of the label, eg. `A+`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLabel::O => "O",
            GradeLabel::APlus => "A+",
            GradeLabel::A => "A",
            GradeLabel::BPlus => "B+",
            GradeLabel::B => "B",
            GradeLabel::C => "C",
            GradeLabel::P => "P",
            GradeLabel::F => "F",
        }
    }
}

impl Display for GradeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a grade scale: the minimum total marks needed for a label and
/// the grade points it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    /// The grade label this band awards.
    pub label:     GradeLabel,
    /// Minimum total marks (internal + external / 2, on a 0-100 scale)
    /// needed to earn this band.
    pub min_marks: f64,
    /// Grade points this band contributes to the SGPA.
    pub points:    f64,
}

impl GradeBand {
    /// Creates a new band.
    pub fn new(label: GradeLabel, min_marks: f64, points: f64) -> Self {
        Self {
            label,
            min_marks,
            points,
        }
    }
}

/// An ordered grade table mapping labels to mark thresholds and grade
/// points, highest threshold first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeScale {
    /// Bands in descending `min_marks` order.
    bands: Vec<GradeBand>,
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::canonical()
    }
}

impl GradeScale {
    /// The canonical scale: `O` at 90 marks down to `P` at 40, with `F`
    /// as the zero-threshold floor.
    pub fn canonical() -> Self {
        Self {
            bands: vec![
                GradeBand::new(GradeLabel::O, 90.0, 10.0),
                GradeBand::new(GradeLabel::APlus, 80.0, 9.0),
                GradeBand::new(GradeLabel::A, 70.0, 8.0),
                GradeBand::new(GradeLabel::BPlus, 60.0, 7.0),
                GradeBand::new(GradeLabel::B, 55.0, 6.0),
                GradeBand::new(GradeLabel::C, 50.0, 5.0),
                GradeBand::new(GradeLabel::P, 40.0, 4.0),
                GradeBand::new(GradeLabel::F, 0.0, 0.0),
            ],
        }
    }

    /// Builds a scale from arbitrary bands, sorting them into descending
    /// threshold order so `band_for_total` stays well-defined.
    pub fn from_bands(mut bands: Vec<GradeBand>) -> Self {
        bands.sort_by(|a, b| b.min_marks.total_cmp(&a.min_marks));
        Self { bands }
    }

    /// Returns the bands in descending threshold order.
    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }

    /// Exact-label lookup.
    pub fn band(&self, label: GradeLabel) -> Option<&GradeBand> {
        self.bands.iter().find(|b| b.label == label)
    }

    /// Returns the band a total mark (on the combined 0-100 scale) earns:
    /// the first band whose threshold the clamped total meets, falling
    /// back to the lowest band. `None` only for an empty scale.
    pub fn band_for_total(&self, total_marks: f64) -> Option<&GradeBand> {
        let total = if total_marks.is_finite() {
            total_marks.clamp(0.0, SEE_MARKS_MAX)
        } else {
            0.0
        };

        self.bands
            .iter()
            .find(|b| total >= b.min_marks)
            .or_else(|| self.bands.last())
    }
}
