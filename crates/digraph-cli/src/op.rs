use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One graph call, as typed on the command line or scripted by the demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphOp<N> {
    AddNode(N),
    DeleteNode(N),
    HasNode(N),
    AddEdge(N, N),
    DeleteEdge(N, N),
    HasEdge(N, N),
    Successors(N),
    Predecessors(N),
    Show,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OpParseError {
    #[error("empty operation")]
    Empty,

    #[error("unknown operation '{0}'")]
    Unknown(String),

    #[error("'{op}' takes {expected} argument(s), got {got}")]
    Arity {
        op: String,
        expected: usize,
        got: usize,
    },
}

impl<N> GraphOp<N> {
    pub fn name(&self) -> &'static str {
        match self {
            GraphOp::AddNode(_) => "add-node",
            GraphOp::DeleteNode(_) => "delete-node",
            GraphOp::HasNode(_) => "has-node",
            GraphOp::AddEdge(..) => "add-edge",
            GraphOp::DeleteEdge(..) => "delete-edge",
            GraphOp::HasEdge(..) => "has-edge",
            GraphOp::Successors(_) => "successors",
            GraphOp::Predecessors(_) => "predecessors",
            GraphOp::Show => "show",
        }
    }
}

fn arity(name: &str) -> Option<usize> {
    match name {
        "show" => Some(0),
        "add-node" | "delete-node" | "has-node" | "successors" | "predecessors" => Some(1),
        "add-edge" | "delete-edge" | "has-edge" => Some(2),
        _ => None,
    }
}

impl FromStr for GraphOp<String> {
    type Err = OpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or(OpParseError::Empty)?;
        let args: Vec<String> = words.map(str::to_string).collect();

        let op = match (name, args.as_slice()) {
            ("show", []) => GraphOp::Show,
            ("add-node", [n]) => GraphOp::AddNode(n.clone()),
            ("delete-node", [n]) => GraphOp::DeleteNode(n.clone()),
            ("has-node", [n]) => GraphOp::HasNode(n.clone()),
            ("successors", [n]) => GraphOp::Successors(n.clone()),
            ("predecessors", [n]) => GraphOp::Predecessors(n.clone()),
            ("add-edge", [a, b]) => GraphOp::AddEdge(a.clone(), b.clone()),
            ("delete-edge", [a, b]) => GraphOp::DeleteEdge(a.clone(), b.clone()),
            ("has-edge", [a, b]) => GraphOp::HasEdge(a.clone(), b.clone()),
            (name, args) => {
                return Err(match arity(name) {
                    Some(expected) => OpParseError::Arity {
                        op: name.to_string(),
                        expected,
                        got: args.len(),
                    },
                    None => OpParseError::Unknown(name.to_string()),
                })
            }
        };
        Ok(op)
    }
}

impl<N: fmt::Display> fmt::Display for GraphOp<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self {
            GraphOp::AddNode(n)
            | GraphOp::DeleteNode(n)
            | GraphOp::HasNode(n)
            | GraphOp::Successors(n)
            | GraphOp::Predecessors(n) => write!(f, " {}", n),
            GraphOp::AddEdge(a, b) | GraphOp::DeleteEdge(a, b) | GraphOp::HasEdge(a, b) => {
                write!(f, " {} {}", a, b)
            }
            GraphOp::Show => Ok(()),
        }
    }
}
