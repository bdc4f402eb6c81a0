//! Full-pipeline analysis command.
//!
//! Runs syntax validation, detection, scoring, and view derivation over a
//! file or stdin; with `--use-ai` an advisory explanation pass runs against
//! the configured chat-completion endpoint. The advisory layer is strictly
//! explanatory: a dead endpoint degrades to `ai: disabled`, never to a
//! failed analysis.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use sentra_engine::{
    Advisor, AnalysisPipeline, AnalysisReport, AnalysisRequest, AuditLog, EngineConfig,
    EngineDecision, HttpChatProvider, InputKind, Severity,
};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze; reads stdin when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Input kind: code, api, sql, or config
    #[arg(short, long, default_value = "code")]
    pub kind: String,

    /// Declared language (auto-detected when omitted)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Opt in to the advisory AI explanation pass
    #[arg(long)]
    pub use_ai: bool,

    /// Print the raw report as JSON
    #[arg(long)]
    pub json: bool,

    /// Append audit events to this file
    #[arg(long)]
    pub audit_log: Option<PathBuf>,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let kind: InputKind = args
        .kind
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid kind '{}' (expected code|api|sql|config)", args.kind))?;

    let content = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let mut request = AnalysisRequest::new(kind, content)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .with_ai(args.use_ai);
    if let Some(language) = &args.language {
        request = request.with_language(language);
    }

    let config = EngineConfig::from_env();
    let audit = match args.audit_log.as_ref().or(config.audit_log_path.as_ref()) {
        Some(path) => AuditLog::open(path)
            .with_context(|| format!("Failed to open audit log: {}", path.display()))?,
        None => AuditLog::disabled(),
    };

    let mut pipeline = AnalysisPipeline::new(audit.clone());
    if args.use_ai {
        let provider = HttpChatProvider::new(&config.advisory)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        let advisor =
            Advisor::new(Arc::new(provider), audit).with_config(&config.advisory);
        pipeline = pipeline.with_advisor(advisor);
    }

    let report = pipeline
        .analyze_with_advisory(&request)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    if report.engine_decision == EngineDecision::HaltedAtSyntaxStage {
        println!("{}", "✗ Halted at syntax stage".bright_red().bold());
        println!("  Language: {}", report.syntax.language);
        for error in &report.syntax.errors {
            println!(
                "  {}:{} {}",
                error.line,
                error.column,
                error.message.bright_red()
            );
        }
        return;
    }

    println!("{}", "Sentra Analysis Report".bright_blue().bold());
    println!("{}", "=".repeat(50).bright_blue());
    println!("Language: {}", report.syntax.language);
    println!("Risk score: {:.1}", report.risk_score);
    println!(
        "Findings: {} ({} critical, {} high, {} medium, {} low)",
        report.summary.total,
        report.summary.critical,
        report.summary.high,
        report.summary.medium,
        report.summary.low
    );
    println!("Time: {:.1} ms", report.processing_time_ms);

    for finding in &report.findings {
        let severity = match finding.severity {
            Severity::Critical => format!("{}", finding.severity).red().bold(),
            Severity::High => format!("{}", finding.severity).bright_red(),
            Severity::Medium => format!("{}", finding.severity).yellow(),
            Severity::Low => format!("{}", finding.severity).green(),
        };

        println!();
        println!("[{}] {}", severity, finding.vuln_type.bold());
        if let Some(location) = &finding.location {
            println!("  at line {}", location.line);
        }
        println!("  {}", finding.description);
        if let Some(recommendation) = &finding.recommendation {
            println!("  fix: {}", recommendation.bright_green());
        }
        if let Some(fix) = report.defender_fixes.get(&finding.id) {
            println!("  e.g. {}", fix.secure_example.dimmed());
        }
    }

    println!();
    if report.ai.enabled {
        if let Some(advisory) = &report.ai.advisory {
            println!("{}", "AI advisory (non-authoritative)".bright_cyan().bold());
            println!("  {}", advisory.explanation.summary);
            for hypothesis in &advisory.hypotheses {
                println!(
                    "  {} {} ({:?} confidence, unverified)",
                    "?".bright_cyan(),
                    hypothesis.title,
                    hypothesis.confidence
                );
            }
        }
    } else {
        println!("{}", "AI advisory: disabled".dimmed());
    }
}
