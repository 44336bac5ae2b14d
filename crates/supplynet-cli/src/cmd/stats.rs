//! `snet stats`: structural summary of a relationship list.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use supplynet_analysis::{GraphStats, SupplierGraph};

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `snet stats`.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    /// JSON file holding the relationship array. Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Execute `snet stats`.
pub fn run_stats(args: &StatsArgs, output: OutputMode) -> anyhow::Result<()> {
    let relationships = super::read_relationships(args.file.as_deref())?;
    let stats = GraphStats::from_graph(&SupplierGraph::from_relationships(&relationships));
    render_mode(output, &stats, render_stats_text, render_stats_pretty)
}

fn render_stats_text(stats: &GraphStats, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "nodes  {}", stats.node_count)?;
    writeln!(w, "edges  {}", stats.edge_count)?;
    writeln!(w, "distinct_edges  {}", stats.distinct_edge_count)?;
    writeln!(w, "self_loops  {}", stats.self_loop_count)?;
    writeln!(w, "isolated  {}", stats.isolated_node_count)?;
    writeln!(w, "max_in_degree  {}", stats.max_in_degree)?;
    writeln!(w, "max_out_degree  {}", stats.max_out_degree)?;
    writeln!(w, "density  {:.4}", stats.density)?;
    writeln!(w, "components  {}", stats.weakly_connected_component_count)?;
    writeln!(w, "hash  {}", stats.content_hash)
}

fn render_stats_pretty(stats: &GraphStats, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Supplier graph")?;
    pretty_kv(w, "Providers", stats.node_count.to_string())?;
    pretty_kv(
        w,
        "Relationships",
        format!("{} ({} distinct)", stats.edge_count, stats.distinct_edge_count),
    )?;
    pretty_kv(w, "Self-loops", stats.self_loop_count.to_string())?;
    pretty_kv(w, "Isolated", stats.isolated_node_count.to_string())?;
    pretty_kv(
        w,
        "Max degree",
        format!("in {} / out {}", stats.max_in_degree, stats.max_out_degree),
    )?;
    pretty_kv(w, "Density", format!("{:.4}", stats.density))?;
    pretty_kv(w, "Communities", stats.weakly_connected_component_count.to_string())?;
    pretty_kv(w, "Fingerprint", &stats.content_hash)
}
