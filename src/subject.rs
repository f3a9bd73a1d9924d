#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        CIE_RAW_MAX, CREDIT_MAX, INTERNAL_ASSESSMENT_MAX, INTERNAL_MARKS_MAX, LAB_MARKS_MAX,
        QUIZ_MARKS_MAX, SEE_MARKS_MAX,
    },
    scale::GradeLabel,
};

/// Clamps a mark to `[0, max]`, mapping non-finite values to 0.
fn clamped_marks(value: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        0.0
    }
}

/// One gradable course entry in a semester plan.
///
/// Which assessment fields matter depends on the credit structure: subjects
/// with at most 2 total credits carry a single aggregate internal score
/// (`total_internal_marks`); everything else combines the first two CIE
/// scores with either the internal assessment (no practical credits) or the
/// lab and quiz scores (practical credits present). The third CIE and the
/// actual SEE score are recorded but never enter the internal-marks
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    /// Subject name. May be empty; displays default to `Subject N`.
    pub name: String,
    /// Lecture credits (L), 0..=4.
    pub lecture_credits: u8,
    /// Tutorial credits (T), 0..=4.
    pub tutorial_credits: u8,
    /// Practical credits (P), 0..=4.
    pub practical_credits: u8,
    /// First CIE score, out of 40.
    pub cie1: f64,
    /// Second CIE score, out of 40.
    pub cie2: f64,
    /// Third CIE score, out of 40. Recorded only.
    pub cie3: f64,
    /// Internal assessment score, out of 10. Theory-only subjects.
    pub internal_assessment: f64,
    /// Lab score, out of 25. Subjects with practical credits.
    pub lab_marks: f64,
    /// Quiz score, out of 5. Subjects with practical credits.
    pub quiz_marks: f64,
    /// Aggregate internal score, out of 50. Low-credit subjects only.
    pub total_internal_marks: f64,
    /// Actual SEE score, out of 100, if already known. Feeds the
    /// projected grade, not the internal-marks computation.
    pub see_marks: f64,
    /// The grade this subject is aiming for.
    pub estimated_grade: GradeLabel,
}

impl Default for Subject {
    fn default() -> Self {
        Self {
            name: String::new(),
            lecture_credits: 0,
            tutorial_credits: 0,
            practical_credits: 0,
            cie1: 0.0,
            cie2: 0.0,
            cie3: 0.0,
            internal_assessment: 0.0,
            lab_marks: 0.0,
            quiz_marks: 0.0,
            total_internal_marks: 0.0,
            see_marks: 0.0,
            estimated_grade: GradeLabel::default(),
        }
    }
}

impl Subject {
    /// Applies a single validated field update in place. Numeric payloads
    /// are clamped to the field's declared range; nothing out of range is
    /// ever stored.
    pub fn apply(&mut self, update: SubjectField) {
        match update {
            SubjectField::Name(name) => self.name = name,
            SubjectField::LectureCredits(v) => self.lecture_credits = v.min(CREDIT_MAX),
            SubjectField::TutorialCredits(v) => self.tutorial_credits = v.min(CREDIT_MAX),
            SubjectField::PracticalCredits(v) => self.practical_credits = v.min(CREDIT_MAX),
            SubjectField::Cie1(v) => self.cie1 = clamped_marks(v, CIE_RAW_MAX),
            SubjectField::Cie2(v) => self.cie2 = clamped_marks(v, CIE_RAW_MAX),
            SubjectField::Cie3(v) => self.cie3 = clamped_marks(v, CIE_RAW_MAX),
            SubjectField::InternalAssessment(v) => {
                self.internal_assessment = clamped_marks(v, INTERNAL_ASSESSMENT_MAX)
            }
            SubjectField::LabMarks(v) => self.lab_marks = clamped_marks(v, LAB_MARKS_MAX),
            SubjectField::QuizMarks(v) => self.quiz_marks = clamped_marks(v, QUIZ_MARKS_MAX),
            SubjectField::TotalInternalMarks(v) => {
                self.total_internal_marks = clamped_marks(v, INTERNAL_MARKS_MAX)
            }
            SubjectField::SeeMarks(v) => self.see_marks = clamped_marks(v, SEE_MARKS_MAX),
            SubjectField::EstimatedGrade(grade) => self.estimated_grade = grade,
        }
    }

    /// Returns a copy with every field forced into its declared range.
    /// Plans loaded from disk run through this so the engine never sees a
    /// raw out-of-range value.
    pub fn clamped(&self) -> Subject {
        Subject {
            name: self.name.clone(),
            lecture_credits: self.lecture_credits.min(CREDIT_MAX),
            tutorial_credits: self.tutorial_credits.min(CREDIT_MAX),
            practical_credits: self.practical_credits.min(CREDIT_MAX),
            cie1: clamped_marks(self.cie1, CIE_RAW_MAX),
            cie2: clamped_marks(self.cie2, CIE_RAW_MAX),
            cie3: clamped_marks(self.cie3, CIE_RAW_MAX),
            internal_assessment: clamped_marks(self.internal_assessment, INTERNAL_ASSESSMENT_MAX),
            lab_marks: clamped_marks(self.lab_marks, LAB_MARKS_MAX),
            quiz_marks: clamped_marks(self.quiz_marks, QUIZ_MARKS_MAX),
            total_internal_marks: clamped_marks(self.total_internal_marks, INTERNAL_MARKS_MAX),
            see_marks: clamped_marks(self.see_marks, SEE_MARKS_MAX),
            estimated_grade: self.estimated_grade,
        }
    }

    /// The name to display for this subject: its own name, or `Subject N`
    /// (1-based) when empty.
    pub fn display_name(&self, index: usize) -> String {
        if self.name.trim().is_empty() {
            format!("Subject {}", index + 1)
        } else {
            self.name.clone()
        }
    }

    /// Formats the credit structure as the conventional `L-T-P` triple.
    pub fn credit_triple(&self) -> String {
        format!(
            "{}-{}-{}",
            self.lecture_credits, self.tutorial_credits, self.practical_credits
        )
    }
}

/// A single field update for a [`Subject`], one variant per mutable field.
///
/// Each variant carries its own range contract, applied by
/// [`Subject::apply`]. This replaces a stringly-keyed setter: there is no
/// way to name a field that does not exist or to skip its clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SubjectField {
    /// Free-text subject name.
    Name(String),
    /// Lecture credits, clamped to 0..=4.
    LectureCredits(u8),
    /// Tutorial credits, clamped to 0..=4.
    TutorialCredits(u8),
    /// Practical credits, clamped to 0..=4.
    PracticalCredits(u8),
    /// First CIE score, clamped to 0..=40.
    Cie1(f64),
    /// Second CIE score, clamped to 0..=40.
    Cie2(f64),
    /// Third CIE score, clamped to 0..=40.
    Cie3(f64),
    /// Internal assessment, clamped to 0..=10.
    InternalAssessment(f64),
    /// Lab score, clamped to 0..=25.
    LabMarks(f64),
    /// Quiz score, clamped to 0..=5.
    QuizMarks(f64),
    /// Aggregate internal score, clamped to 0..=50.
    TotalInternalMarks(f64),
    /// Actual SEE score, clamped to 0..=100.
    SeeMarks(f64),
    /// Target grade label.
    EstimatedGrade(GradeLabel),
}
