//! Split command handler.

use clap::Args;
use docsplit_core::{config::AppConfig, AppError, AppResult};
use docsplit_splitter::SplitOptions;
use std::path::PathBuf;

/// Split blobs into per-document artifacts
#[derive(Args, Debug)]
pub struct SplitCommand {
    /// Files or directories to split
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Include patterns for directory walks (substring match)
    #[arg(long)]
    pub include: Vec<String>,

    /// Exclude patterns for directory walks (substring match)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SplitCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing split command for {} path(s)", self.paths.len());

        let options = SplitOptions {
            prefix: config.prefix.clone(),
            output_dir: config.output_dir.clone(),
        };

        let batch = docsplit_splitter::split_all(&self.paths, &self.include, &self.exclude, &options);

        if self.json {
            let output = serde_json::json!({
                "sourcesCount": batch.reports.len(),
                "artifactsCount": batch.artifact_count(),
                "bytesProcessed": batch.byte_count(),
                "skipped": batch.skipped.iter()
                    .map(|(path, reason)| serde_json::json!({
                        "path": path,
                        "reason": reason,
                    }))
                    .collect::<Vec<_>>(),
                "durationSecs": batch.duration_secs,
                "reports": batch.reports,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            for report in &batch.reports {
                let fallback = if report.declaration_count == 0 {
                    " (no declarations; single-artifact fallback)"
                } else {
                    ""
                };
                println!(
                    "{}: {} artifacts from {} lines{}",
                    report.source.display(),
                    report.artifacts.len(),
                    report.lines,
                    fallback
                );
            }
            for (path, reason) in &batch.skipped {
                println!("skipped {}: {}", path.display(), reason);
            }
            println!(
                "Split {} sources into {} artifacts ({} bytes) in {:.2}s",
                batch.reports.len(),
                batch.artifact_count(),
                batch.byte_count(),
                batch.duration_secs
            );
        }

        if batch.reports.is_empty() && !batch.skipped.is_empty() {
            return Err(AppError::Split(format!(
                "All {} source(s) failed to split",
                batch.skipped.len()
            )));
        }

        Ok(())
    }
}
