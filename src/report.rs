#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The export collaborator: pure formatting of a finished plan into a
//! terminal summary table, a schema-versioned JSON document, and a
//! paginated plain-text report. Nothing here computes marks; everything is
//! derived through the planner.

use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};
use typed_builder::TypedBuilder;

use crate::{
    constants::{INTERNAL_MARKS_MAX, REPORT_PAGE_ROWS},
    planner::{Planner, SubjectOutcome},
};

/// Version stamped onto every exported JSON report.
pub const REPORT_SCHEMA_VERSION: u8 = 1;

/// One displayable row of the grade summary, with marks pre-formatted to
/// 2 decimal places the way every surface reports them.
#[derive(Tabled, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Subject display name.
    #[tabled(rename = "Subject")]
    pub subject: String,
    /// Credit structure as `L-T-P`.
    #[tabled(rename = "Credits (L-T-P)")]
    pub credits: String,
    /// Internal marks, 2 decimal places.
    #[tabled(rename = "Internal Marks")]
    pub internal_marks: String,
    /// The grade the subject is aiming for.
    #[tabled(rename = "Estimated Grade")]
    pub estimated_grade: String,
    /// Required external marks, 2 decimal places.
    #[tabled(rename = "Required External (out of 100)")]
    pub required_external: String,
    /// Grade the recorded SEE score would earn, or `-`.
    #[tabled(rename = "Projected Grade")]
    pub projected_grade: String,
}

impl SummaryRow {
    /// Formats one derived outcome into its display row.
    pub fn from_outcome(outcome: &SubjectOutcome) -> Self {
        Self {
            subject: outcome.name.clone(),
            credits: outcome.credits.clone(),
            internal_marks: format!("{:.2}", outcome.internal_marks),
            estimated_grade: outcome.estimated_grade.to_string(),
            required_external: format!("{:.2}", outcome.required_external),
            projected_grade: outcome
                .projected_grade
                .map_or_else(|| "-".to_string(), |grade| grade.to_string()),
        }
    }
}

/// The exported report document for one semester plan.
#[derive(Serialize, Deserialize, Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct SemesterReport {
    /// Schema version of this document.
    #[builder(default = REPORT_SCHEMA_VERSION)]
    pub schema_version: u8,

    /// Semester the plan targets.
    pub semester: u8,

    /// Expected SGPA, rounded to 2 decimal places.
    pub sgpa: f64,

    /// Per-subject summary rows, in plan order.
    pub rows: Vec<SummaryRow>,

    /// Subjects whose target grade cannot be reached even with a perfect
    /// external score.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Formats every subject in the plan as a summary row.
pub fn summary_rows(planner: &Planner) -> Vec<SummaryRow> {
    planner
        .outcomes()
        .iter()
        .map(SummaryRow::from_outcome)
        .collect()
}

/// Builds the exportable report document for a plan, including
/// out-of-reach warnings for any subject whose estimated grade needs more
/// than a perfect external score.
pub fn semester_report(planner: &Planner) -> SemesterReport {
    let outcomes = planner.outcomes();
    let warnings: Vec<String> = outcomes
        .iter()
        .filter(|outcome| {
            planner
                .scale()
                .band(outcome.estimated_grade)
                .is_some_and(|band| outcome.internal_marks + INTERNAL_MARKS_MAX < band.min_marks)
        })
        .map(|outcome| {
            format!(
                "{}: grade {} is out of reach even with a perfect external score",
                outcome.name, outcome.estimated_grade
            )
        })
        .collect();

    SemesterReport::builder()
        .semester(planner.semester())
        .sgpa(planner.sgpa())
        .rows(outcomes.iter().map(SummaryRow::from_outcome).collect::<Vec<_>>())
        .warnings(warnings)
        .build()
}

/// Renders the grade summary table for the terminal, with a header panel.
/// The expected SGPA is left to the caller's emphasis line so it prints
/// exactly once.
pub fn render_summary(planner: &Planner) -> String {
    let rows = summary_rows(planner);

    Table::new(&rows)
        .with(Panel::header("Grade Summary"))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Renders the paginated plain-text report: a fixed number of subject rows
/// per page, each page repeating the summary header and carrying a page
/// footer.
pub fn render_pages(planner: &Planner) -> Vec<String> {
    let rows = summary_rows(planner);

    /// Assembles one page from its table body and page position.
    fn page(planner: &Planner, body: &str, number: usize, total: usize) -> String {
        format!(
            "Academic Performance Summary\nSemester: {}\nExpected SGPA: {:.2}\n\n{}\n\nPage {} of \
             {}",
            planner.semester(),
            planner.sgpa(),
            body,
            number,
            total
        )
    }

    if rows.is_empty() {
        return vec![page(planner, "No subjects planned.", 1, 1)];
    }

    let grouped = rows.into_iter().chunks(REPORT_PAGE_ROWS);
    let chunks: Vec<Vec<SummaryRow>> = grouped.into_iter().map(|chunk| chunk.collect()).collect();
    let total = chunks.len();

    chunks
        .iter()
        .enumerate()
        .map(|(index, chunk)| {
            let body = Table::new(chunk).with(Style::modern()).to_string();
            page(planner, &body, index + 1, total)
        })
        .collect()
}

/// Writes the JSON report document for a plan to `path`.
pub fn write_json(planner: &Planner, path: &Path) -> Result<()> {
    let report = semester_report(planner);
    let mut file = fs::File::create(path)
        .with_context(|| format!("Could not create report file {}", path.display()))?;
    file.write_all(serde_json::to_string_pretty(&report)?.as_bytes())
        .with_context(|| format!("Could not write report to {}", path.display()))?;
    Ok(())
}
