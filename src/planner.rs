#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{SEMESTER_MAX, SEMESTER_MIN, SUBJECT_COUNT_MAX},
    grade::{internal_marks, required_external_marks, round2, total_credits, weighted_average},
    scale::{GradeLabel, GradeScale},
    subject::{Subject, SubjectField},
};

/// An error from a planner mutation.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PlannerError {
    /// The update named a subject index past the end of the plan.
    #[error("no subject at index {index}; the plan holds {len} subject(s)")]
    SubjectIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of subjects in the plan.
        len:   usize,
    },
}

/// The derived numbers for one subject, ready for display or export.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectOutcome {
    /// Display name, defaulted to `Subject N` when unnamed.
    pub name: String,
    /// Credit structure as `L-T-P`.
    pub credits: String,
    /// Total credits across the three components.
    pub total_credits: u8,
    /// Internal marks on the 0-50 scale.
    pub internal_marks: f64,
    /// The grade this subject is aiming for.
    pub estimated_grade: GradeLabel,
    /// External marks needed for the estimated grade, on the 0-100 scale.
    pub required_external: f64,
    /// Grade the recorded SEE score would actually earn, when one has
    /// been entered.
    pub projected_grade: Option<GradeLabel>,
}

/// A caller-owned, mutable semester plan: the semester number and its
/// subject list, plus the grade scale every derivation runs against.
///
/// The planner owns all mutable state so the engine functions stay pure;
/// it is transient by design and only ever round-trips through JSON when
/// the caller asks it to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planner {
    /// Semester this plan targets, 1..=8.
    semester: u8,
    /// The subjects being planned, at most 10.
    subjects: Vec<Subject>,
    /// Grade scale used for every lookup. Not serialized; plans loaded
    /// from disk always use the canonical scale.
    #[serde(skip, default)]
    scale:    GradeScale,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(SEMESTER_MIN)
    }
}

impl Planner {
    /// Creates an empty plan for the given semester (clamped to 1..=8),
    /// using the canonical grade scale.
    pub fn new(semester: u8) -> Self {
        Self {
            semester: semester.clamp(SEMESTER_MIN, SEMESTER_MAX),
            subjects: Vec::new(),
            scale:    GradeScale::canonical(),
        }
    }

    /// Creates an empty plan against a custom grade scale.
    pub fn with_scale(semester: u8, scale: GradeScale) -> Self {
        Self {
            scale,
            ..Self::new(semester)
        }
    }

    /// The semester this plan targets.
    pub fn semester(&self) -> u8 {
        self.semester
    }

    /// Sets the semester, clamped to 1..=8.
    pub fn set_semester(&mut self, semester: u8) {
        self.semester = semester.clamp(SEMESTER_MIN, SEMESTER_MAX);
    }

    /// The grade scale derivations run against.
    pub fn scale(&self) -> &GradeScale {
        &self.scale
    }

    /// The subjects currently in the plan.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Number of subjects currently in the plan.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Resizes the subject list to `count`, clamped to at most 10.
    /// Growing appends fresh default subjects; shrinking truncates.
    pub fn set_subject_count(&mut self, count: usize) {
        let count = count.min(SUBJECT_COUNT_MAX);
        if count > self.subjects.len() {
            self.subjects.resize_with(count, Subject::default);
        } else {
            self.subjects.truncate(count);
        }
    }

    /// Applies one field update to the subject at `index`. The payload is
    /// clamped by [`Subject::apply`]; the only failure is a bad index.
    pub fn update(&mut self, index: usize, update: SubjectField) -> Result<(), PlannerError> {
        let len = self.subjects.len();
        let subject = self
            .subjects
            .get_mut(index)
            .ok_or(PlannerError::SubjectIndexOutOfBounds { index, len })?;
        subject.apply(update);
        Ok(())
    }

    /// Derives the outcome row for the subject at `index`.
    pub fn outcome(&self, index: usize) -> Option<SubjectOutcome> {
        let subject = self.subjects.get(index)?;
        Some(self.outcome_for(index, subject))
    }

    /// Derives outcome rows for every subject, in plan order.
    pub fn outcomes(&self) -> Vec<SubjectOutcome> {
        self.subjects
            .iter()
            .enumerate()
            .map(|(index, subject)| self.outcome_for(index, subject))
            .collect()
    }

    /// The expected SGPA for the plan, rounded to 2 decimal places.
    pub fn sgpa(&self) -> f64 {
        round2(weighted_average(&self.subjects, &self.scale))
    }

    /// Builds the outcome row for one subject.
    fn outcome_for(&self, index: usize, subject: &Subject) -> SubjectOutcome {
        let internal = internal_marks(subject);
        let required = required_external_marks(subject, &self.scale, internal);

        // A recorded SEE score projects the grade actually earned via the
        // same half-weight identity: total = internal + external / 2.
        let projected_grade = if subject.see_marks > 0.0 {
            self.scale
                .band_for_total(internal + subject.see_marks / 2.0)
                .map(|band| band.label)
        } else {
            None
        };

        SubjectOutcome {
            name: subject.display_name(index),
            credits: subject.credit_triple(),
            total_credits: total_credits(subject),
            internal_marks: internal,
            estimated_grade: subject.estimated_grade,
            required_external: required,
            projected_grade,
        }
    }

    /// Parses a plan from its JSON document form, clamping every stored
    /// value back into range. The file is caller input and is never
    /// trusted to have clamped anything itself.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut planner: Planner =
            serde_json::from_str(json).context("Could not parse semester plan")?;
        planner.sanitize();
        Ok(planner)
    }

    /// Serializes the plan to its pretty-printed JSON document form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Could not serialize semester plan")
    }

    /// Forces every stored value back into its declared range.
    fn sanitize(&mut self) {
        self.semester = self.semester.clamp(SEMESTER_MIN, SEMESTER_MAX);
        self.subjects.truncate(SUBJECT_COUNT_MAX);
        for subject in &mut self.subjects {
            *subject = subject.clamped();
        }
    }
}
