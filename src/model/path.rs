//! Path — a sequence of alternating nodes and relationships.

use serde::{Deserialize, Serialize};
use crate::{Error, Result};
use super::{Node, Relationship};

/// A path in the graph: node -[rel]-> node -[rel]-> node ...
///
/// Invariant: `nodes.len() == relationships.len() + 1`. [`Path::new`] rejects
/// anything else; the field types alone cannot express it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<Node>,
    relationships: Vec<Relationship>,
}

impl Path {
    /// Build a path, checking the node/relationship count invariant.
    pub fn new(nodes: Vec<Node>, relationships: Vec<Relationship>) -> Result<Self> {
        if nodes.len() != relationships.len() + 1 {
            return Err(Error::MalformedPath(format!(
                "{} nodes cannot carry {} relationships",
                nodes.len(),
                relationships.len()
            )));
        }
        Ok(Self { nodes, relationships })
    }

    pub fn single(node: Node) -> Self {
        Self { nodes: vec![node], relationships: Vec::new() }
    }

    /// Path length counts relationships, not nodes.
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    pub fn start(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn end(&self) -> &Node {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Extend path with a relationship and its target node.
    pub fn append(&mut self, rel: Relationship, node: Node) {
        self.relationships.push(rel);
        self.nodes.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeId, RelId};

    #[test]
    fn test_single_and_append() {
        let mut p = Path::single(Node::new(NodeId(1)));
        assert_eq!(p.len(), 0);
        assert!(p.is_empty());

        p.append(
            Relationship::new(RelId(1), NodeId(1), NodeId(2), "KNOWS"),
            Node::new(NodeId(2)),
        );
        assert_eq!(p.len(), 1);
        assert_eq!(p.start().id, NodeId(1));
        assert_eq!(p.end().id, NodeId(2));
    }

    #[test]
    fn test_new_rejects_mismatched_counts() {
        let err = Path::new(
            vec![Node::new(NodeId(1))],
            vec![Relationship::new(RelId(1), NodeId(1), NodeId(2), "KNOWS")],
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedPath(_)));
    }
}
