use crate::cli::RunArgs;
use crate::context::{CliContext, OpReport, OpValue};
use crate::output::Printer;

use super::apply_and_report;

/// Node names are trimmed the same way in `--nodes` and `--edge`.
fn node_name(raw: &str) -> String {
    raw.trim().to_string()
}

pub fn handle(printer: &Printer, sort_output: bool, args: RunArgs) -> anyhow::Result<()> {
    let nodes = args.nodes.iter().map(|n| node_name(n));
    let edges = args
        .edges
        .iter()
        .map(|edge| edge.split(',').map(node_name).collect::<Vec<_>>());

    let mut ctx = match CliContext::from_parts(nodes, edges, sort_output) {
        Ok(ctx) => ctx,
        Err(e) => printer.fatal(&e.to_string(), Some(e.kind())),
    };
    tracing::info!(
        nodes = ctx.graph().node_count(),
        edges = ctx.graph().edge_count(),
        "graph built"
    );

    printer.report(&OpReport::new("build", OpValue::Graph(ctx.snapshot())))?;
    for op in &args.ops {
        apply_and_report(&mut ctx, printer, op)?;
    }
    Ok(())
}
