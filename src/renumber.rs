//! The renumber operation: discover -> plan -> staged apply.

use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::RenumberError;
use crate::fs_ops::{ApplyReport, apply_plan, discover};
use crate::plan::{Plan, build_plan};

/// Everything a run produced.
#[derive(Debug)]
pub struct RenumberReport {
    pub plan: Plan,
    /// `None` for dry runs and when nothing needed renaming.
    pub apply: Option<ApplyReport>,
    pub dry_run: bool,
}

impl RenumberReport {
    pub fn renamed(&self) -> usize {
        self.apply.as_ref().map_or(0, ApplyReport::committed)
    }

    pub fn failures(&self) -> &[RenumberError] {
        self.apply
            .as_ref()
            .map(|a| a.failures.as_slice())
            .unwrap_or(&[])
    }

    pub fn cleanup_warning(&self) -> Option<&RenumberError> {
        self.apply.as_ref().and_then(|a| a.cleanup.as_ref())
    }

    /// Files left alone because they fell past the cap.
    pub fn skipped(&self) -> usize {
        self.plan.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.apply.as_ref().is_none_or(ApplyReport::is_clean)
    }
}

/// Discover and plan without touching the filesystem.
pub fn plan_renumber(cfg: &Config) -> Result<Plan, RenumberError> {
    cfg.validate()?;
    let entries = discover(&cfg.directory, &cfg.extension, &cfg.variant_marker)?;
    let plan = build_plan(entries, cfg.max_count, &cfg.extension);
    info!(
        found = plan.total_entries(),
        regular = plan.regular_count,
        alternate = plan.alternate_count,
        assigned = plan.assignments.len(),
        skipped = plan.skipped.len(),
        dir = %cfg.directory.display(),
        "Planned renumbering"
    );
    for e in &plan.skipped {
        debug!(file = %e.file_name, max_count = cfg.max_count, "Past the cap; left untouched");
    }
    Ok(plan)
}

/// Renumber every matching file in `cfg.directory` to `1..N`.
///
/// Fatal errors (missing directory, bad config, staging directory problems)
/// are returned before anything is moved. Per-file move failures and a failed
/// staging cleanup are reported in the returned `RenumberReport`.
pub fn renumber_with_config(cfg: &Config) -> Result<RenumberReport, RenumberError> {
    let plan = plan_renumber(cfg)?;

    if cfg.dry_run {
        for a in &plan.assignments {
            info!(from = %a.entry.file_name, to = %a.target_name, "dry-run");
        }
        return Ok(RenumberReport {
            plan,
            apply: None,
            dry_run: true,
        });
    }

    if plan.is_empty() {
        info!(dir = %cfg.directory.display(), "Nothing to rename");
        return Ok(RenumberReport {
            plan,
            apply: None,
            dry_run: false,
        });
    }

    let applied = apply_plan(&plan, &cfg.directory, &cfg.staging_dir_name)?;
    if applied.is_clean() {
        info!(renamed = applied.committed(), "Renumbering complete");
    } else {
        warn!(
            renamed = applied.committed(),
            failed = applied.failures.len(),
            staging_left = applied.cleanup.is_some(),
            "Renumbering finished with failures"
        );
    }

    Ok(RenumberReport {
        plan,
        apply: Some(applied),
        dry_run: false,
    })
}

/// Renumber `directory` with the default extension and staging name.
pub fn renumber(
    directory: &Path,
    max_count: usize,
    variant_marker: &str,
) -> Result<RenumberReport, RenumberError> {
    let cfg = Config::new(directory)
        .with_max_count(max_count)
        .with_variant_marker(variant_marker);
    renumber_with_config(&cfg)
}
