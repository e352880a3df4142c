use crate::context::{CliContext, OpReport, OpValue};
use crate::op::GraphOp;
use crate::output::Printer;
use crate::point::Point;

use super::apply_and_report;

const P1: Point = Point::new(1, 2);
const P2: Point = Point::new(3, 4);
const P3: Point = Point::new(5, 6);

/// Operations replayed against graph1, in order
fn script() -> Vec<GraphOp<Point>> {
    vec![
        GraphOp::DeleteEdge(P2, P3),
        GraphOp::DeleteEdge(P3, P2),
        GraphOp::HasEdge(P3, P2),
        GraphOp::HasEdge(P1, P2),
        GraphOp::AddEdge(P2, P3),
        GraphOp::AddEdge(P2, P3),
        GraphOp::AddEdge(P3, P2),
        GraphOp::DeleteNode(P3),
        GraphOp::DeleteNode(P3),
        GraphOp::HasNode(P3),
        GraphOp::HasNode(P2),
        GraphOp::AddNode(P3),
    ]
}

fn compare(
    printer: &Printer,
    graph1: &CliContext<Point>,
    graph2: &CliContext<Point>,
) -> anyhow::Result<()> {
    let equal = graph1.graph() == graph2.graph();
    printer.report(&OpReport::new("graph1 == graph2", OpValue::Answer(equal)))
}

pub fn handle(printer: &Printer, sort_output: bool) -> anyhow::Result<()> {
    let mut graph1 =
        CliContext::from_parts([P1, P2, P3], [[P1, P2], [P3, P2], [P3, P3]], sort_output)?;
    let graph2 = CliContext::from_parts([P1, P2, P3], [[P1, P2]], sort_output)?;

    printer.note("The initial graph1 is:");
    printer.report(&OpReport::new("show graph1", OpValue::Graph(graph1.snapshot())))?;
    printer.note("And graph2 is (graph2 won't be changed):");
    printer.report(&OpReport::new("show graph2", OpValue::Graph(graph2.snapshot())))?;
    compare(printer, &graph1, &graph2)?;

    printer.note("Operations on graph1:");
    for op in script() {
        apply_and_report(&mut graph1, printer, &op)?;
    }

    compare(printer, &graph1, &graph2)
}
