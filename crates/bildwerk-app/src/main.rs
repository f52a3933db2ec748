// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bildwerk — classic image-processing demo pipeline
//
// Entry point. Initialises logging, reads one image path from stdin, runs
// the fixed processing sequence, and reports where the gallery landed.
// Every exit path returns status 0; failures are reported as plain text.

use std::io::{BufRead, Write};

use bildwerk_core::config::PipelineConfig;
use bildwerk_core::human_errors::humanize_error;
use bildwerk_pipeline::Pipeline;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Bildwerk starting");

    println!("Enter the path of the image:");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line).is_err() || line.trim().is_empty() {
        println!("No path entered.");
        return;
    }

    let pipeline = Pipeline::new(PipelineConfig::default());
    match pipeline.run(&line) {
        Ok(report) => {
            for notice in &report.notices {
                println!("{notice}");
            }
            println!(
                "Wrote {} result images to {}.",
                report.stage_count,
                report.gallery_dir.display()
            );
            println!("Run manifest: {}", report.manifest_path.display());
        }
        Err(err) => {
            tracing::error!(error = %err, "pipeline run failed");
            let human = humanize_error(&err);
            println!("{}", human.message);
            println!("{}", human.suggestion);
        }
    }
}
