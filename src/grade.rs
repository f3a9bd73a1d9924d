#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The grading engine: pure functions from subjects and a grade scale to
//! derived marks. Nothing here mutates its inputs or holds state, so every
//! function is idempotent and safe to call per row on every refresh.

use crate::{
    constants::{CIE_RAW_MAX, CIE_SCALED_MAX, LOW_CREDIT_THRESHOLD, SEE_MARKS_MAX},
    scale::GradeScale,
    subject::Subject,
};

/// Sum of the three credit fields of a subject. Saturates rather than
/// overflowing on credits that escaped clamping.
pub fn total_credits(subject: &Subject) -> u8 {
    subject
        .lecture_credits
        .saturating_add(subject.tutorial_credits)
        .saturating_add(subject.practical_credits)
}

/// Rescales one raw CIE score (out of 40) to its 20-mark contribution.
fn scaled_cie(raw: f64) -> f64 {
    raw / CIE_RAW_MAX * CIE_SCALED_MAX
}

/// Computes a subject's internal marks, always in `[0, 50]`.
///
/// Low-credit subjects (total credits at most 2) pass their stored
/// aggregate score through unchanged. Everyone else combines the first two
/// CIE scores, each rescaled from 40 to 20 marks, into `best_cie`; theory
/// subjects add the internal assessment on top, subjects with practical
/// credits halve `best_cie` and add lab and quiz scores instead.
///
/// Inputs are clamped here as well as at entry, so the result range holds
/// even for a subject that bypassed field-level validation.
pub fn internal_marks(subject: &Subject) -> f64 {
    let subject = subject.clamped();

    if total_credits(&subject) <= LOW_CREDIT_THRESHOLD {
        return subject.total_internal_marks;
    }

    let best_cie = scaled_cie(subject.cie1) + scaled_cie(subject.cie2);

    if subject.practical_credits == 0 {
        best_cie + subject.internal_assessment
    } else {
        best_cie / 2.0 + subject.lab_marks + subject.quiz_marks
    }
}

/// Computes the external (SEE) marks needed to reach the subject's
/// estimated grade, clamped to `[0, 100]`.
///
/// External marks contribute at half weight to the combined total
/// (`total = internal + external / 2`), hence the factor of 2. A result of
/// 0 means the internal marks alone already meet the threshold; a result
/// of 100 may mean the grade is out of reach, which a caller can detect by
/// checking `internal_marks + 50 < band.min_marks`. A label absent from
/// the scale yields 0.
pub fn required_external_marks(subject: &Subject, scale: &GradeScale, internal_marks: f64) -> f64 {
    let Some(band) = scale.band(subject.estimated_grade) else {
        return 0.0;
    };

    let external_required = 2.0 * (band.min_marks - internal_marks);
    external_required.clamp(0.0, SEE_MARKS_MAX)
}

/// Computes the credit-weighted average of grade points across subjects.
///
/// Subjects whose estimated grade has no band in the scale are skipped,
/// not errored on. An empty list, or one whose credits sum to zero,
/// averages to 0. Accumulation runs at full precision; round with
/// [`round2`] for display.
pub fn weighted_average(subjects: &[Subject], scale: &GradeScale) -> f64 {
    let (credit_points, credit_sum) = subjects
        .iter()
        .filter_map(|subject| {
            scale
                .band(subject.estimated_grade)
                .map(|band| (f64::from(total_credits(subject)), band.points))
        })
        .fold((0.0, 0.0), |(points, credits), (subject_credits, band_points)| {
            (points + subject_credits * band_points, credits + subject_credits)
        });

    if credit_sum > 0.0 {
        credit_points / credit_sum
    } else {
        0.0
    }
}

/// Rounds a value to 2 decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
