use digraph_core::{DirectedGraph, Edge, GraphNode, GraphResult};
use serde::Serialize;
use std::fmt;

use crate::op::GraphOp;

/// Printable view of a graph at one point in time
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge<String>>,
    pub rendered: String,
}

/// What a successful operation produced
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OpValue {
    Answer(bool),
    Nodes(Vec<String>),
    Graph(GraphSnapshot),
}

#[derive(Debug, Clone, Serialize)]
pub struct OpReport {
    pub op: String,
    pub result: OpValue,
}

impl OpReport {
    pub fn new(op: impl Into<String>, result: OpValue) -> Self {
        Self {
            op: op.into(),
            result,
        }
    }
}

/// A graph owned by one CLI invocation, plus how it should be listed
pub struct CliContext<N> {
    graph: DirectedGraph<N>,
    sort_output: bool,
}

impl<N: GraphNode + fmt::Display> CliContext<N> {
    pub fn from_parts<I, E, P>(nodes: I, edges: E, sort_output: bool) -> GraphResult<Self, N>
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = P>,
        P: IntoIterator<Item = N>,
    {
        Ok(Self {
            graph: DirectedGraph::from_parts(nodes, edges)?,
            sort_output,
        })
    }

    pub fn graph(&self) -> &DirectedGraph<N> {
        &self.graph
    }

    /// Run one operation; mutations answer with the resulting graph
    pub fn apply(&mut self, op: &GraphOp<N>) -> GraphResult<OpValue, N> {
        match op {
            GraphOp::AddNode(node) => self.graph.add_node(node.clone())?,
            GraphOp::DeleteNode(node) => self.graph.delete_node(node)?,
            GraphOp::AddEdge(source, target) => {
                self.graph.add_edge(source.clone(), target.clone())?
            }
            GraphOp::DeleteEdge(source, target) => self.graph.delete_edge(source, target)?,
            GraphOp::HasNode(node) => return Ok(OpValue::Answer(self.graph.has_node(node))),
            GraphOp::HasEdge(source, target) => {
                return Ok(OpValue::Answer(self.graph.has_edge(source, target)?))
            }
            GraphOp::Successors(node) => {
                return Ok(OpValue::Nodes(self.listing(self.graph.successors(node)?)))
            }
            GraphOp::Predecessors(node) => {
                return Ok(OpValue::Nodes(self.listing(self.graph.predecessors(node)?)))
            }
            GraphOp::Show => {}
        }
        Ok(OpValue::Graph(self.snapshot()))
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        let nodes = self.listing(self.graph.nodes().cloned());
        let mut edges: Vec<Edge<String>> = self
            .graph
            .edges()
            .into_iter()
            .map(|e| Edge::new(e.source.to_string(), e.target.to_string()))
            .collect();

        let rendered = if self.sort_output {
            edges.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));
            let edge_list: Vec<String> = edges.iter().map(ToString::to_string).collect();
            format!(
                "DirectedGraph< Nodes: {{{}}}  Edges: {{{}}} >",
                nodes.join(", "),
                edge_list.join(", ")
            )
        } else {
            self.graph.to_string()
        };

        GraphSnapshot {
            nodes,
            edges,
            rendered,
        }
    }

    fn listing(&self, nodes: impl IntoIterator<Item = N>) -> Vec<String> {
        let mut names: Vec<String> = nodes.into_iter().map(|n| n.to_string()).collect();
        if self.sort_output {
            names.sort();
        }
        names
    }
}
