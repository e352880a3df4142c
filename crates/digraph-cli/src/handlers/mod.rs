pub mod demo;
pub mod run;

use digraph_core::GraphNode;
use std::fmt;

use crate::context::{CliContext, OpReport};
use crate::op::GraphOp;
use crate::output::Printer;

/// Apply `op` and print its outcome. Graph errors are reported, not returned:
/// they reject a single operation and never abort the session.
pub fn apply_and_report<N: GraphNode + fmt::Display>(
    ctx: &mut CliContext<N>,
    printer: &Printer,
    op: &GraphOp<N>,
) -> anyhow::Result<()> {
    let label = op.to_string();
    match ctx.apply(op) {
        Ok(result) => {
            tracing::debug!(op = %label, "operation applied");
            printer.report(&OpReport::new(label, result))
        }
        Err(e) => {
            tracing::debug!(op = %label, kind = ?e.kind(), "operation rejected");
            printer.failure(&label, &e.to_string(), e.kind())
        }
    }
}
