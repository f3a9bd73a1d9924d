#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Maximum credits for each of the lecture, tutorial, and practical
/// components of a subject.
pub const CREDIT_MAX: u8 = 4;

/// Total credits at or below which a subject uses the low-credit assessment
/// scheme (a single aggregate internal score instead of CIE components).
pub const LOW_CREDIT_THRESHOLD: u8 = 2;

/// Raw scale each CIE (Continuous Internal Evaluation) score is reported on.
pub const CIE_RAW_MAX: f64 = 40.0;

/// Scale each CIE score is rescaled to before entering internal marks.
pub const CIE_SCALED_MAX: f64 = 20.0;

/// Maximum internal-assessment score for theory-only subjects.
pub const INTERNAL_ASSESSMENT_MAX: f64 = 10.0;

/// Maximum lab score for subjects with practical credits.
pub const LAB_MARKS_MAX: f64 = 25.0;

/// Maximum quiz score for subjects with practical credits.
pub const QUIZ_MARKS_MAX: f64 = 5.0;

/// Maximum aggregate internal score for low-credit subjects, and the upper
/// bound of internal marks in general.
pub const INTERNAL_MARKS_MAX: f64 = 50.0;

/// Scale the external (SEE) examination is reported on. External marks
/// contribute at half weight, so `total = internal + external / 2`.
pub const SEE_MARKS_MAX: f64 = 100.0;

/// First semester a plan can target.
pub const SEMESTER_MIN: u8 = 1;

/// Last semester a plan can target.
pub const SEMESTER_MAX: u8 = 8;

/// Most subjects a single semester plan may hold.
pub const SUBJECT_COUNT_MAX: usize = 10;

/// Subject rows per page in the paginated text report.
pub const REPORT_PAGE_ROWS: usize = 6;
