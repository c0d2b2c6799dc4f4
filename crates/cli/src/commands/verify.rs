//! Verify command handler.

use clap::Args;
use docsplit_core::{config::AppConfig, AppError, AppResult};
use docsplit_splitter::{SplitOptions, VerifyFailure};
use std::path::PathBuf;

/// Verify a completed split against its source blob
#[derive(Args, Debug)]
pub struct VerifyCommand {
    /// Source blob whose artifacts should be checked
    pub path: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl VerifyCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing verify command for {:?}", self.path);

        let options = SplitOptions {
            prefix: config.prefix.clone(),
            output_dir: config.output_dir.clone(),
        };

        let report = docsplit_splitter::verify_split(&self.path, &options)?;

        if self.json {
            let output = serde_json::json!({
                "source": report.source,
                "expectedArtifacts": report.expected_artifacts,
                "declarationCount": report.declaration_count,
                "ok": report.ok(),
                "failures": report.failures,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else if report.ok() {
            println!(
                "OK: {} artifacts of {} are intact",
                report.expected_artifacts,
                report.source.display()
            );
        } else {
            println!(
                "FAILED: {} finding(s) for {}",
                report.failures.len(),
                report.source.display()
            );
            for failure in &report.failures {
                match failure {
                    VerifyFailure::MissingArtifact { path } => {
                        println!("- missing artifact {}", path.display())
                    }
                    VerifyFailure::EmptyArtifact { path } => {
                        println!("- empty artifact {}", path.display())
                    }
                    VerifyFailure::BadFirstLine { path } => println!(
                        "- artifact {} does not open with the declaration prefix",
                        path.display()
                    ),
                    VerifyFailure::ContentMismatch { path } => {
                        println!("- artifact {} differs from the source", path.display())
                    }
                }
            }
        }

        if report.ok() {
            Ok(())
        } else {
            Err(AppError::Verify(format!(
                "{} of {} artifact check(s) failed for {}",
                report.failures.len(),
                report.expected_artifacts,
                self.path.display()
            )))
        }
    }
}
