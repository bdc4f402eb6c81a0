//! Detector listing command.

use anyhow::Result;
use clap::Args;
use colored::*;
use sentra_engine::DetectorRegistry;

#[derive(Args, Debug)]
pub struct DetectorsArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: DetectorsArgs) -> Result<()> {
    let registry = DetectorRegistry::with_defaults();

    if args.json {
        let list: Vec<_> = registry
            .all()
            .iter()
            .map(|d| {
                serde_json::json!({
                    "id": d.id(),
                    "name": d.name(),
                    "description": d.description(),
                    "baseSeverity": d.severity(),
                    "confidence": d.confidence(),
                    "window": format!("{:?}", d.window()),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    println!("{}", "Registered detectors".bright_blue().bold());
    println!("{}", "=".repeat(50).bright_blue());
    for detector in registry.all() {
        println!(
            "{:<22} {} [{} / {}]",
            detector.id().bold(),
            detector.name(),
            detector.severity(),
            detector.confidence()
        );
        println!("{:<22} {}", "", detector.description().dimmed());
    }

    Ok(())
}
