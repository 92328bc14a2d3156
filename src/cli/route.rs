//! CLI route: single route table and run context. Dispatches to the manifest
//! pipeline and presentation.

use crate::cli::parse::Commands;
use crate::cli::{picker, presentation, progress};
use crate::config::DumpConfig;
use crate::manifest::{CancelFlag, ManifestBuilder};
use crate::report;
use crate::sfo::DiscSummary;
use anyhow::Context;
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution: resolved configuration and the
/// cancellation flag the build polls. The flag is owned here so embedders or
/// signal handlers can clone it before executing.
pub struct RunContext {
    config: DumpConfig,
    cancel: CancelFlag,
}

impl RunContext {
    /// Create a run context from loaded configuration.
    pub fn new(config: DumpConfig) -> Self {
        Self {
            config,
            cancel: CancelFlag::new(),
        }
    }

    /// Cancellation flag for this run.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Execute one parsed command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> anyhow::Result<String> {
        match command {
            Commands::Scan {
                root,
                format,
                report,
                no_report,
                no_progress,
            } => self.run_scan(root, format, report.as_deref(), *no_report, *no_progress),
            Commands::Info { root, format } => self.run_info(root, format),
        }
    }

    fn run_scan(
        &self,
        root: &Option<PathBuf>,
        format: &str,
        report_path: Option<&std::path::Path>,
        no_report: bool,
        no_progress: bool,
    ) -> anyhow::Result<String> {
        let root = resolve_root(root)?;
        info!(root = %root.display(), "scan started");

        let summary = DiscSummary::read(&root);

        let builder =
            ManifestBuilder::with_config(root.clone(), self.config.scan.walker_config());
        let bar = (!no_progress).then(progress::manifest_bar);
        let manifest = builder.build(&self.cancel, |processed, total| {
            if let Some(bar) = &bar {
                progress::tick(bar, processed, total);
            }
        })?;
        if let Some(bar) = &bar {
            bar.finish_and_clear();
        }
        info!(
            files = manifest.len(),
            cancelled = manifest.cancelled,
            "scan finished"
        );

        if !no_report {
            let path = report_path
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(report::default_report_name()));
            report::write_report_file(&path, &summary, &manifest)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!(report = %path.display(), "report written");
        }

        match format {
            "json" => presentation::format_scan_json(&summary, &manifest)
                .context("failed to encode scan result"),
            _ => Ok(presentation::format_scan_text(&summary, &manifest)),
        }
    }

    fn run_info(&self, root: &Option<PathBuf>, format: &str) -> anyhow::Result<String> {
        let root = resolve_root(root)?;
        let summary = DiscSummary::read(&root);
        match format {
            "json" => presentation::format_summary_json(&summary)
                .context("failed to encode summary"),
            _ => Ok(presentation::format_summary_text(&summary)),
        }
    }
}

/// Use the given root or fall back to the interactive prompt.
fn resolve_root(root: &Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match root {
        Some(root) => Ok(root.clone()),
        None => picker::prompt_root(),
    }
}
