use std::collections::{HashMap, HashSet};
use std::fmt;

use super::edge::Edge;
use super::traits::GraphNode;
use crate::{GraphError, GraphResult};

/// Mutable directed graph over any [`GraphNode`] type
///
/// Every edge is indexed twice: once in the source's outgoing set and once
/// in the target's incoming set. Both maps always have the same keys (the
/// nodes of the graph), `in_edges` is the exact transpose of `out_edges`,
/// and no set references a node that is not a key.
///
/// All mutations check their preconditions before touching either map, so a
/// rejected call leaves the graph exactly as it was.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N> {
    /// `out_edges[x]` holds every `y` such that `x -> y` is an edge
    out_edges: HashMap<N, HashSet<N>>,
    /// `in_edges[x]` holds every `y` such that `y -> x` is an edge
    in_edges: HashMap<N, HashSet<N>>,
}

impl<N> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self {
            out_edges: HashMap::new(),
            in_edges: HashMap::new(),
        }
    }
}

impl<N: GraphNode> DirectedGraph<N> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a node list and a list of edge pairs
    ///
    /// Nodes are added first, then edges, both in input order. Each edge item
    /// must yield exactly two nodes. The first failure aborts construction.
    pub fn from_parts<I, E, P>(nodes: I, edges: E) -> GraphResult<Self, N>
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = P>,
        P: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node)?;
        }
        for (index, pair) in edges.into_iter().enumerate() {
            let pair: Vec<N> = pair.into_iter().collect();
            let [source, target]: [N; 2] = pair
                .try_into()
                .map_err(|nodes: Vec<N>| GraphError::MalformedEdgeInput { index, nodes })?;
            graph.add_edge(source, target)?;
        }
        Ok(graph)
    }

    /// Build a graph from a node list and `(source, target)` tuples
    pub fn from_pairs<I, E>(nodes: I, edges: E) -> GraphResult<Self, N>
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node)?;
        }
        for (source, target) in edges {
            graph.add_edge(source, target)?;
        }
        Ok(graph)
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.out_edges.contains_key(node)
    }

    /// Add a node with no edges
    pub fn add_node(&mut self, node: N) -> GraphResult<(), N> {
        if self.has_node(&node) {
            return Err(GraphError::NodeAlreadyExists(node));
        }
        self.out_edges.insert(node.clone(), HashSet::new());
        self.in_edges.insert(node, HashSet::new());
        Ok(())
    }

    /// Remove a node together with every edge in which it participates
    pub fn delete_node(&mut self, node: &N) -> GraphResult<(), N> {
        // Taking the node's own sets out of the maps also snapshots them
        // before any neighbour is touched.
        let Some(successors) = self.out_edges.remove(node) else {
            return Err(GraphError::NodeDoesNotExist(node.clone()));
        };
        let predecessors = self.in_edges.remove(node).unwrap_or_default();

        // A self-loop's reciprocal entries went away with the node's own
        // sets, so the node itself is skipped here.
        for successor in successors.iter().filter(|n| *n != node) {
            if let Some(incoming) = self.in_edges.get_mut(successor) {
                incoming.remove(node);
            }
        }
        for predecessor in predecessors.iter().filter(|n| *n != node) {
            if let Some(outgoing) = self.out_edges.get_mut(predecessor) {
                outgoing.remove(node);
            }
        }
        Ok(())
    }

    /// Check if the edge `source -> target` exists
    ///
    /// Both endpoints must be nodes of the graph; `source` is checked first.
    pub fn has_edge(&self, source: &N, target: &N) -> GraphResult<bool, N> {
        let successors = self
            .out_edges
            .get(source)
            .ok_or_else(|| GraphError::NodeDoesNotExist(source.clone()))?;
        if !self.has_node(target) {
            return Err(GraphError::NodeDoesNotExist(target.clone()));
        }
        Ok(successors.contains(target))
    }

    /// Add the edge `source -> target`
    pub fn add_edge(&mut self, source: N, target: N) -> GraphResult<(), N> {
        let Some(successors) = self.out_edges.get_mut(&source) else {
            return Err(GraphError::EdgeAdditionForMissingNode(source));
        };
        let Some(predecessors) = self.in_edges.get_mut(&target) else {
            return Err(GraphError::EdgeAdditionForMissingNode(target));
        };
        if successors.contains(&target) {
            return Err(GraphError::EdgeAlreadyExists {
                from: source,
                to: target,
            });
        }
        successors.insert(target);
        predecessors.insert(source);
        Ok(())
    }

    /// Remove the edge `source -> target`
    ///
    /// A missing endpoint has no edges, so it is reported as a missing edge.
    pub fn delete_edge(&mut self, source: &N, target: &N) -> GraphResult<(), N> {
        let removed = self
            .out_edges
            .get_mut(source)
            .is_some_and(|successors| successors.remove(target));
        if !removed {
            return Err(GraphError::EdgeDoesNotExist {
                from: source.clone(),
                to: target.clone(),
            });
        }
        if let Some(predecessors) = self.in_edges.get_mut(target) {
            predecessors.remove(source);
        }
        Ok(())
    }

    /// Iterate over the nodes (order unspecified)
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.out_edges.keys()
    }

    /// Get all edges as owned values, each listed once
    pub fn edges(&self) -> Vec<Edge<N>> {
        self.out_edges
            .iter()
            .flat_map(|(source, targets)| {
                targets
                    .iter()
                    .map(move |target| Edge::new(source.clone(), target.clone()))
            })
            .collect()
    }

    /// Nodes reachable from `node` by one outgoing edge
    pub fn successors(&self, node: &N) -> GraphResult<HashSet<N>, N> {
        self.out_edges
            .get(node)
            .cloned()
            .ok_or_else(|| GraphError::NodeDoesNotExist(node.clone()))
    }

    /// Nodes with an edge into `node`
    pub fn predecessors(&self, node: &N) -> GraphResult<HashSet<N>, N> {
        self.in_edges
            .get(node)
            .cloned()
            .ok_or_else(|| GraphError::NodeDoesNotExist(node.clone()))
    }

    pub fn out_degree(&self, node: &N) -> GraphResult<usize, N> {
        self.out_edges
            .get(node)
            .map(HashSet::len)
            .ok_or_else(|| GraphError::NodeDoesNotExist(node.clone()))
    }

    pub fn in_degree(&self, node: &N) -> GraphResult<usize, N> {
        self.in_edges
            .get(node)
            .map(HashSet::len)
            .ok_or_else(|| GraphError::NodeDoesNotExist(node.clone()))
    }

    pub fn node_count(&self) -> usize {
        self.out_edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.out_edges.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.out_edges.is_empty()
    }

    /// Remove every node and edge
    pub fn clear(&mut self) {
        self.out_edges.clear();
        self.in_edges.clear();
    }
}

/// Two graphs are equal iff they have exactly the same nodes and edges
impl<N: GraphNode> PartialEq for DirectedGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.out_edges == other.out_edges && self.in_edges == other.in_edges
    }
}

impl<N: GraphNode> Eq for DirectedGraph<N> {}

/// Renders as `DirectedGraph< Nodes: {a, b}  Edges: {[a->b]} >`
///
/// Nodes and edges appear in map iteration order.
impl<N: GraphNode + fmt::Display> fmt::Display for DirectedGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DirectedGraph< Nodes: {")?;
        for (i, node) in self.out_edges.keys().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", node)?;
        }

        f.write_str("}  Edges: {")?;
        let mut first = true;
        for (source, targets) in &self.out_edges {
            for target in targets {
                if !first {
                    f.write_str(", ")?;
                }
                first = false;
                write!(f, "[{}->{}]", source, target)?;
            }
        }
        f.write_str("} >")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphErrorKind;

    fn assert_invariants<N: GraphNode + fmt::Debug>(graph: &DirectedGraph<N>) {
        let out_keys: HashSet<&N> = graph.out_edges.keys().collect();
        let in_keys: HashSet<&N> = graph.in_edges.keys().collect();
        assert_eq!(out_keys, in_keys, "node sets differ between indices");

        for (source, targets) in &graph.out_edges {
            for target in targets {
                assert!(out_keys.contains(target), "dangling target {:?}", target);
                assert!(
                    graph.in_edges[target].contains(source),
                    "{:?} -> {:?} missing from incoming index",
                    source,
                    target
                );
            }
        }
        for (target, sources) in &graph.in_edges {
            for source in sources {
                assert!(out_keys.contains(source), "dangling source {:?}", source);
                assert!(
                    graph.out_edges[source].contains(target),
                    "{:?} -> {:?} missing from outgoing index",
                    source,
                    target
                );
            }
        }
    }

    fn abc() -> DirectedGraph<&'static str> {
        DirectedGraph::from_pairs(["a", "b", "c"], [("a", "b"), ("b", "c"), ("c", "a")]).unwrap()
    }

    #[test]
    fn test_graph_creation() {
        let graph: DirectedGraph<u32> = DirectedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_invariants(&graph);
    }

    #[test]
    fn test_add_node() {
        let mut graph = DirectedGraph::new();
        graph.add_node(1).unwrap();

        assert!(graph.has_node(&1));
        assert!(!graph.has_node(&2));
        assert_eq!(graph.out_degree(&1).unwrap(), 0);
        assert_eq!(graph.in_degree(&1).unwrap(), 0);
        assert_invariants(&graph);
    }

    #[test]
    fn test_add_node_twice_fails_and_leaves_graph_unchanged() {
        let mut graph = abc();
        let before = graph.clone();

        assert_eq!(
            graph.add_node("a"),
            Err(GraphError::NodeAlreadyExists("a"))
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn test_add_edge() {
        let mut graph = DirectedGraph::from_pairs([1, 2], []).unwrap();
        graph.add_edge(1, 2).unwrap();

        assert!(graph.has_edge(&1, &2).unwrap());
        assert!(!graph.has_edge(&2, &1).unwrap());
        assert_eq!(graph.edge_count(), 1);
        assert_invariants(&graph);
    }

    #[test]
    fn test_add_edge_missing_endpoint_checks_source_first() {
        let mut graph = DirectedGraph::from_pairs([1], []).unwrap();

        assert_eq!(
            graph.add_edge(8, 9),
            Err(GraphError::EdgeAdditionForMissingNode(8))
        );
        assert_eq!(
            graph.add_edge(1, 9),
            Err(GraphError::EdgeAdditionForMissingNode(9))
        );
        assert_eq!(
            graph.add_edge(9, 1),
            Err(GraphError::EdgeAdditionForMissingNode(9))
        );
        assert_eq!(graph.edge_count(), 0);
        assert_invariants(&graph);
    }

    #[test]
    fn test_add_edge_twice_fails() {
        let mut graph = abc();
        let before = graph.clone();

        assert_eq!(
            graph.add_edge("a", "b"),
            Err(GraphError::EdgeAlreadyExists { from: "a", to: "b" })
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn test_has_edge_missing_node() {
        let graph = abc();

        assert_eq!(
            graph.has_edge(&"x", &"y"),
            Err(GraphError::NodeDoesNotExist("x"))
        );
        assert_eq!(
            graph.has_edge(&"a", &"y"),
            Err(GraphError::NodeDoesNotExist("y"))
        );
    }

    #[test]
    fn test_delete_edge_round_trip() {
        let mut graph = abc();

        graph.delete_edge(&"a", &"b").unwrap();
        assert!(!graph.has_edge(&"a", &"b").unwrap());
        assert!(graph.has_edge(&"b", &"c").unwrap());
        assert_eq!(graph.edge_count(), 2);
        assert_invariants(&graph);

        graph.add_edge("a", "b").unwrap();
        assert_eq!(graph, abc());
    }

    #[test]
    fn test_delete_edge_absent() {
        let mut graph = abc();
        let before = graph.clone();

        assert_eq!(
            graph.delete_edge(&"b", &"a"),
            Err(GraphError::EdgeDoesNotExist { from: "b", to: "a" })
        );
        assert_eq!(
            graph.delete_edge(&"a", &"zzz").unwrap_err().kind(),
            GraphErrorKind::EdgeDoesNotExist
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn test_delete_node_cascades() {
        let mut graph = abc();
        graph.delete_node(&"b").unwrap();

        assert!(!graph.has_node(&"b"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edges(), vec![Edge::new("c", "a")]);
        for node in ["a", "c"] {
            assert!(!graph.successors(&node).unwrap().contains("b"));
            assert!(!graph.predecessors(&node).unwrap().contains("b"));
        }
        assert_invariants(&graph);
    }

    #[test]
    fn test_delete_node_absent() {
        let mut graph = abc();

        assert_eq!(
            graph.delete_node(&"q"),
            Err(GraphError::NodeDoesNotExist("q"))
        );
        assert_eq!(graph, abc());
    }

    #[test]
    fn test_delete_self_looped_node() {
        let mut graph = DirectedGraph::from_pairs(["a"], [("a", "a")]).unwrap();
        assert!(graph.has_edge(&"a", &"a").unwrap());

        graph.delete_node(&"a").unwrap();
        assert!(graph.is_empty());
        assert_invariants(&graph);
    }

    #[test]
    fn test_delete_node_with_self_loop_and_neighbours() {
        let mut graph =
            DirectedGraph::from_pairs([1, 2, 3], [(1, 1), (1, 2), (3, 1), (2, 3)]).unwrap();

        graph.delete_node(&1).unwrap();
        assert_eq!(graph.edges(), vec![Edge::new(2, 3)]);
        assert_invariants(&graph);
    }

    #[test]
    fn test_from_parts_rejects_malformed_edges() {
        let result = DirectedGraph::from_parts([1, 2, 3], vec![vec![1, 2], vec![2, 3, 1]]);
        assert_eq!(
            result.unwrap_err(),
            GraphError::MalformedEdgeInput {
                index: 1,
                nodes: vec![2, 3, 1]
            }
        );

        let result = DirectedGraph::from_parts([1, 2], vec![vec![1]]);
        assert_eq!(
            result.unwrap_err(),
            GraphError::MalformedEdgeInput {
                index: 0,
                nodes: vec![1]
            }
        );
    }

    #[test]
    fn test_from_parts_propagates_first_error() {
        let result = DirectedGraph::from_parts([1, 2, 1], vec![vec![1, 2]]);
        assert_eq!(result.unwrap_err(), GraphError::NodeAlreadyExists(1));

        let result = DirectedGraph::from_parts([1, 2], vec![vec![1, 2], vec![1, 2]]);
        assert_eq!(
            result.unwrap_err(),
            GraphError::EdgeAlreadyExists { from: 1, to: 2 }
        );
    }

    #[test]
    fn test_from_parts_matches_from_pairs() {
        let parts = DirectedGraph::from_parts(["a", "b", "c"], [["a", "b"], ["b", "c"], ["c", "a"]])
            .unwrap();
        assert_eq!(parts, abc());
    }

    #[test]
    fn test_successors_and_predecessors_are_copies() {
        let mut graph = abc();
        let mut successors = graph.successors(&"a").unwrap();
        successors.insert("c");

        assert_eq!(graph.successors(&"a").unwrap(), HashSet::from(["b"]));
        assert_eq!(graph.predecessors(&"a").unwrap(), HashSet::from(["c"]));

        graph.delete_edge(&"a", &"b").unwrap();
        assert!(successors.contains("b"));
    }

    #[test]
    fn test_equality_is_sensitive_to_nodes_and_edges() {
        let with_edge = DirectedGraph::from_pairs(["a", "b"], [("a", "b")]).unwrap();
        let without_edge = DirectedGraph::from_pairs(["a", "b"], []).unwrap();
        let fewer_nodes = DirectedGraph::from_pairs(["a"], []).unwrap();

        assert_eq!(with_edge, with_edge.clone());
        assert_ne!(with_edge, without_edge);
        assert_ne!(without_edge, with_edge);
        assert_ne!(without_edge, fewer_nodes);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let forward = DirectedGraph::from_pairs([1, 2, 3], [(1, 2), (2, 3)]).unwrap();
        let backward = DirectedGraph::from_pairs([3, 2, 1], [(2, 3), (1, 2)]).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_clear() {
        let mut graph = abc();
        graph.clear();

        assert!(graph.is_empty());
        assert_eq!(graph, DirectedGraph::new());
    }

    #[test]
    fn test_display_empty() {
        let graph: DirectedGraph<char> = DirectedGraph::new();
        assert_eq!(graph.to_string(), "DirectedGraph< Nodes: {}  Edges: {} >");
    }

    #[test]
    fn test_display_single_edge() {
        let graph = DirectedGraph::from_pairs(['x'], [('x', 'x')]).unwrap();
        assert_eq!(graph.to_string(), "DirectedGraph< Nodes: {x}  Edges: {[x->x]} >");
    }

    #[test]
    fn test_display_lists_each_edge_once() {
        let rendered = abc().to_string();

        for edge in ["[a->b]", "[b->c]", "[c->a]"] {
            assert_eq!(rendered.matches(edge).count(), 1, "{}", rendered);
        }
        assert_eq!(rendered.matches("->").count(), 3);
        assert!(rendered.starts_with("DirectedGraph< Nodes: {"));
        assert!(rendered.ends_with("} >"));
    }
}
