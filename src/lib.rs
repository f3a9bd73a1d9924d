//! # sgpa
//!
//! A semester grade planner: computes internal marks and SGPA from
//! per-subject assessment inputs, and estimates the external (SEE) exam
//! marks needed to reach a target grade.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// A module defining the range and scale constants used throughout
pub mod constants;
/// The pure grading engine: internal marks, required external marks, SGPA
pub mod grade;
/// The caller-owned semester plan and its derived outcomes
pub mod planner;
/// Summary tables and report export
pub mod report;
/// Grade labels, bands, and the grade scale
pub mod scale;
/// The subject data model and its field-update operations
pub mod subject;

pub use planner::{Planner, PlannerError, SubjectOutcome};
pub use scale::{GradeBand, GradeLabel, GradeScale};
pub use subject::{Subject, SubjectField};
