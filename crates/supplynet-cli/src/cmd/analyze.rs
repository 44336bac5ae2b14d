//! `snet analyze`: full structural risk report for a relationship list.

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use supplynet_analysis::analyze_with;
use supplynet_core::config::RiskWeights;
use supplynet_core::model::AnalysisResult;
use tracing::debug;

use crate::output::{OutputMode, pretty_kv, pretty_rule, pretty_section, render_mode};

/// Arguments for `snet analyze`.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// JSON file holding the relationship array. Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Execute `snet analyze`.
pub fn run_analyze(
    args: &AnalyzeArgs,
    weights: &RiskWeights,
    output: OutputMode,
) -> anyhow::Result<()> {
    let relationships = super::read_relationships(args.file.as_deref())?;
    let report = analyze_with(&relationships, weights);
    debug!(
        providers = report.risk_scores.provider_scores.len(),
        "analysis finished"
    );
    render_report(output, &report)
}

/// Render an analysis report in the requested mode.
///
/// JSON mode emits the report exactly as it serializes.
pub fn render_report(output: OutputMode, report: &AnalysisResult) -> anyhow::Result<()> {
    render_mode(output, report, render_report_text, render_report_pretty)
}

fn render_report_text(report: &AnalysisResult, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "has_cycles  {}", report.cycles.has_cycles)?;
    for cycle in &report.cycles.cycles {
        writeln!(w, "cycle  {}", cycle.join(" "))?;
    }
    for bridge in &report.bridges.bridges {
        writeln!(w, "bridge  {bridge}")?;
    }
    for community in &report.communities.communities {
        writeln!(w, "community  {}", community.join(" "))?;
    }
    for (id, score) in &report.risk_scores.provider_scores {
        writeln!(w, "score  {id}  {score}")?;
    }
    Ok(())
}

fn render_report_pretty(
    report: &AnalysisResult,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    pretty_section(w, "Supplier risk report")?;
    pretty_kv(w, "Providers", report.risk_scores.provider_scores.len().to_string())?;
    pretty_kv(w, "Cycles", report.cycles.cycles.len().to_string())?;
    pretty_kv(w, "Bridges", report.bridges.bridges.len().to_string())?;
    pretty_kv(w, "Communities", report.communities.communities.len().to_string())?;

    writeln!(w)?;
    pretty_section(w, "Trading loops")?;
    if report.cycles.cycles.is_empty() {
        writeln!(w, "  none")?;
    }
    for cycle in &report.cycles.cycles {
        writeln!(w, "  {}", cycle.join(" → "))?;
    }

    writeln!(w)?;
    pretty_section(w, "Bridge providers")?;
    if report.bridges.bridges.is_empty() {
        writeln!(w, "  none")?;
    }
    for bridge in &report.bridges.bridges {
        writeln!(w, "  {bridge}")?;
    }

    writeln!(w)?;
    pretty_section(w, "Communities")?;
    for (idx, community) in report.communities.communities.iter().enumerate() {
        writeln!(w, "  {}. {}", idx + 1, community.join(", "))?;
    }

    writeln!(w)?;
    pretty_section(w, "Risk scores")?;
    let in_cycle: HashSet<&str> = report
        .cycles
        .cycles
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();
    let bridges: HashSet<&str> = report.bridges.bridges.iter().map(String::as_str).collect();

    let mut ranked: Vec<(&String, &u8)> = report.risk_scores.provider_scores.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    let width = ranked.iter().map(|(id, _)| id.len()).max().unwrap_or(0);

    for (id, score) in ranked {
        let mut flags = Vec::new();
        if in_cycle.contains(id.as_str()) {
            flags.push("loop");
        }
        if bridges.contains(id.as_str()) {
            flags.push("bridge");
        }
        writeln!(w, "  {id:<width$}  {score:>3}  {}", flags.join(" "))?;
    }
    pretty_rule(w)
}
