//! Application orchestrator.
//! Loads/merges config, initializes logging, asks for confirmation, runs the
//! renumbering and prints the summary.

use anyhow::{Result, bail};
use tracing::{debug, error, warn};

use renumber::cli::Args;
use renumber::output as out;
use renumber::prompt::confirm_stdin;
use renumber::{
    Config, RenumberError, RenumberReport, create_template_config, default_config_path,
    load_config, plan_renumber, renumber_with_config, summarize,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        print_config_location();
        return Ok(());
    }

    if args.init_config {
        let Some(path) = default_config_path() else {
            bail!("Could not determine a config location; set RENUMBER_CONFIG");
        };
        create_template_config(&path)?;
        out::print_success(&format!("Template config written to: {}", path.display()));
        return Ok(());
    }

    // File config first, CLI flags win.
    let mut cfg: Config = load_config()?;
    args.apply_overrides(&mut cfg);

    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;
    debug!("Starting renumber: {:?}", args);

    out::print_info(&format!("Target folder: {}", cfg.directory.display()));

    if !cfg.dry_run && !args.yes {
        // Show the scale of the change before asking.
        let plan = plan_renumber(&cfg).map_err(log_fatal)?;
        out::print_info(&format!(
            "Found {} {} files ({} regular, {} with '{}')",
            plan.total_entries(),
            cfg.extension,
            plan.regular_count,
            plan.alternate_count,
            cfg.variant_marker
        ));
        let question = format!(
            "This will rename ALL {} files in the folder. Continue?",
            cfg.extension
        );
        if !confirm_stdin(&question)? {
            out::print_user("Operation cancelled.");
            return Ok(());
        }
    }

    let report = renumber_with_config(&cfg).map_err(log_fatal)?;
    print_report(&report, &cfg);

    if report.dry_run {
        return Ok(());
    }

    match summarize(&cfg.directory, &cfg.extension) {
        Ok(summary) => {
            out::print_info(&format!("Verification: {summary}"));
            if !summary.is_dense() {
                out::print_warn("Numbering is not a dense 1..N sequence");
            }
        }
        Err(e) => out::print_warn(&format!("Verification skipped: {e}")),
    }

    if !report.failures().is_empty() {
        bail!(
            "{} file(s) failed to rename; see warnings above",
            report.failures().len()
        );
    }
    if let Some(w) = report.cleanup_warning() {
        bail!("{w}");
    }
    Ok(())
}

fn print_config_location() {
    match default_config_path() {
        Some(p) => {
            if std::env::var_os(renumber::config::CONFIG_ENV).is_some() {
                out::print_info(&format!("Using RENUMBER_CONFIG (explicit):\n  {}", p.display()));
            } else {
                out::print_info(&format!("Default renumber config path:\n  {}", p.display()));
            }
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file there yet. Run with --init-config to create one.");
            }
        }
        None => out::print_error("Could not determine a default config path"),
    }
}

fn log_fatal(e: RenumberError) -> anyhow::Error {
    error!(code = e.code(), kind = e.kind(), error = %e, "Renumbering aborted");
    e.into()
}

fn print_report(report: &RenumberReport, cfg: &Config) {
    let plan = &report.plan;

    if report.dry_run {
        for a in &plan.assignments {
            out::print_rename(&a.entry.file_name, &a.target_name);
        }
        out::print_info(&format!(
            "Dry-run: {} file(s) would be renamed, {} left untouched",
            plan.assignments.len(),
            plan.skipped.len()
        ));
        return;
    }

    if let Some(applied) = &report.apply {
        for r in &applied.renamed {
            let from = r
                .from
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let to = r
                .to
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            out::print_rename(&from, &to);
        }
    }

    for f in report.failures() {
        out::print_warn(&f.to_string());
    }
    if let Some(RenumberError::CleanupFailed { path, orphans, .. }) = report.cleanup_warning() {
        warn!(path = %path.display(), orphans = orphans.len(), "Staging directory left behind");
        out::print_warn(&format!(
            "Could not remove {}; recover these files manually:",
            path.display()
        ));
        for o in orphans {
            out::print_user(&format!("  {}", o.display()));
        }
    }
    if report.skipped() > 0 {
        out::print_warn(&format!(
            "{} file(s) past max_count {} were left untouched",
            report.skipped(),
            cfg.max_count
        ));
    }

    let renamed = report.renamed();
    if renamed == 0 && report.failures().is_empty() {
        out::print_info("Nothing to rename.");
    } else if report.failures().is_empty() {
        out::print_success(&format!(
            "Rename complete! {renamed} files renamed sequentially, numbered 1-{renamed}."
        ));
    } else {
        out::print_warn(&format!(
            "{renamed} file(s) renamed, {} failed",
            report.failures().len()
        ));
    }
}
