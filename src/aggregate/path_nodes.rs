//! Knotenfolge eines Routing-Pfads für die Pfad-Darstellung.

use crate::payload::PathSegment;
use serde::Serialize;

/// Darstellungsart eines Pfadknotens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Router,
    Switch,
    /// Leitung zwischen zwei Knoten (trägt den Latenzwert)
    Line,
    Unknown,
}

impl NodeKind {
    fn classify(value: &str) -> Self {
        if value.starts_with("EBR") {
            NodeKind::Router
        } else if value.starts_with('P') {
            NodeKind::Switch
        } else {
            NodeKind::Unknown
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathNode {
    pub value: String,
    #[serde(rename = "source")]
    pub kind: NodeKind,
}

impl PathNode {
    fn new(value: &str, kind: NodeKind) -> Self {
        Self {
            value: value.to_string(),
            kind,
        }
    }
}

/// Wandelt Segmente in eine Knotenfolge `from, value, to, value, to, ...`.
///
/// Der letzte Knoten ist immer ein Router (das Ziel-Gateway).
pub fn map_path_nodes(segments: &[PathSegment]) -> Vec<PathNode> {
    let Some(first) = segments.first() else {
        return Vec::new();
    };

    let mut nodes = Vec::with_capacity(segments.len() * 2 + 1);
    nodes.push(PathNode::new(&first.from, NodeKind::classify(&first.from)));

    let last = segments.len() - 1;
    for (idx, segment) in segments.iter().enumerate() {
        nodes.push(PathNode::new(&segment.value, NodeKind::Line));
        let kind = if idx == last {
            NodeKind::Router
        } else {
            NodeKind::classify(&segment.to)
        };
        nodes.push(PathNode::new(&segment.to, kind));
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(from: &str, to: &str, value: &str) -> PathSegment {
        PathSegment {
            from: from.to_string(),
            to: to.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_node_sequence_and_kinds() {
        let nodes = map_path_nodes(&[
            seg("EBR-MDC", "P-MDC-1", "3"),
            seg("P-MDC-1", "TR-02", "5"),
            seg("TR-02", "GW-BDS", "11"),
        ]);
        let flat: Vec<(&str, NodeKind)> =
            nodes.iter().map(|n| (n.value.as_str(), n.kind)).collect();
        assert_eq!(
            flat,
            vec![
                ("EBR-MDC", NodeKind::Router),
                ("3", NodeKind::Line),
                ("P-MDC-1", NodeKind::Switch),
                ("5", NodeKind::Line),
                ("TR-02", NodeKind::Unknown),
                ("11", NodeKind::Line),
                ("GW-BDS", NodeKind::Router),
            ]
        );
    }

    #[test]
    fn test_empty_path() {
        assert!(map_path_nodes(&[]).is_empty());
    }

    #[test]
    fn test_serialized_kind_field() {
        let nodes = map_path_nodes(&[seg("X", "P1", "2")]);
        let json = serde_json::to_value(&nodes).unwrap();
        assert_eq!(json[0]["source"], "unknown");
        assert_eq!(json[1]["source"], "line");
        assert_eq!(json[2]["source"], "router");
    }
}
