#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # sgpa
//!
//! A semester grade planner for the terminal. Plans live in small JSON
//! files; `sgpa template` emits a blank one, `sgpa summary` prints the
//! grade summary table, and `sgpa report` / `sgpa pages` export it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use sgpa::{Planner, report};
use tracing::{Level, info, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Print a blank plan with the given number of subjects
    Template(usize, u8),
    /// Print the grade summary table for a plan
    Summary(String),
    /// Write the JSON report for a plan
    Report(String, PathBuf),
    /// Print the paginated text report for a plan
    Pages(String),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the path to a plan file
    fn p() -> impl Parser<String> {
        positional("PLAN").help("Path to a semester plan JSON file")
    }

    /// parses the subject count for a fresh template
    fn n() -> impl Parser<usize> {
        positional("COUNT").help("Number of subjects in the plan (0-10)")
    }

    /// parses the semester a template targets
    fn s() -> impl Parser<u8> {
        short('s')
            .long("semester")
            .help("Semester the plan targets (1-8)")
            .argument::<u8>("SEMESTER")
            .fallback(1)
    }

    /// parses the output path for the JSON report
    fn o() -> impl Parser<PathBuf> {
        short('o')
            .long("out")
            .help("Where to write the JSON report")
            .argument::<PathBuf>("PATH")
            .fallback(PathBuf::from("report.json"))
    }

    let template = construct!(Cmd::Template(n(), s()))
        .to_options()
        .command("template")
        .help("Print a blank semester plan to fill in");

    let summary = construct!(Cmd::Summary(p()))
        .to_options()
        .command("summary")
        .help("Print the grade summary and expected SGPA");

    let report = construct!(Cmd::Report(p(), o()))
        .to_options()
        .command("report")
        .help("Write the report as JSON");

    let pages = construct!(Cmd::Pages(p()))
        .to_options()
        .command("pages")
        .help("Print the paginated text report");

    let cmd = construct!([template, summary, report, pages]);

    cmd.to_options().descr("Semester grade planner").run()
}

/// Loads a plan from a JSON file, clamping every stored value.
fn load_plan(path: &str) -> Result<Planner> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("Could not read plan {path}"))?;
    Planner::from_json(&json)
}

fn main() -> Result<()> {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();

    match cmd {
        Cmd::Template(count, semester) => {
            let mut planner = Planner::new(semester);
            planner.set_subject_count(count);
            println!("{}", planner.to_json()?);
        }
        Cmd::Summary(path) => {
            let planner = load_plan(&path)?;
            println!("{}", report::render_summary(&planner));
            println!("{}", format!("Expected SGPA: {:.2}", planner.sgpa()).bold().green());
        }
        Cmd::Report(path, out) => {
            let planner = load_plan(&path)?;
            report::write_json(&planner, &out)?;
            info!("Wrote report for semester {} to {}", planner.semester(), out.display());
        }
        Cmd::Pages(path) => {
            let planner = load_plan(&path)?;
            for page in report::render_pages(&planner) {
                println!("{page}\n");
            }
        }
    };

    Ok(())
}
