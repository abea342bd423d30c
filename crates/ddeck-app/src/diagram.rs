//! Diagram rendering for mermaid flowchart descriptions
//!
//! Turns a mermaid-flowchart description into a text-art visual for
//! the terminal: node boxes grouped into layers by edge depth, with
//! the connections listed underneath. Only the flowchart subset the
//! design service emits is supported (`graph`/`flowchart` header,
//! `A[Label]` node declarations, `A --> B` and `A -->|label| B`
//! edges).
//!
//! A failed render returns the offending source verbatim so the caller
//! can offer a raw-text fallback, and one failing diagram never
//! affects its siblings: every description renders independently.

use std::collections::HashMap;

use rand::Rng;

/// Identifier for one batch of render invocations.
///
/// A new attempt id is drawn whenever a design's diagrams are
/// (re)rendered; completions carrying a stale id are discarded so a
/// slow render can never overwrite a newer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderAttempt(u64);

impl RenderAttempt {
    pub fn new() -> Self {
        Self(rand::thread_rng().gen())
    }
}

impl Default for RenderAttempt {
    fn default() -> Self {
        Self::new()
    }
}

/// A render failure carrying the offending description verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub message: String,
    pub source: String,
}

impl RenderError {
    fn new(message: impl Into<String>, source: &str) -> Self {
        Self {
            message: message.into(),
            source: source.to_string(),
        }
    }
}

/// A laid-out diagram, ready to print line by line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramVisual {
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    id: String,
    label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Edge {
    from: String,
    to: String,
    label: Option<String>,
}

/// Parsed flowchart: nodes in declaration order plus directed edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl DiagramGraph {
    fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Register a node, keeping the first declaration's position and
    /// upgrading a bare id with a label from a later statement.
    fn upsert(&mut self, id: &str, label: Option<String>) {
        match self.node_index(id) {
            Some(idx) => {
                if let Some(label) = label {
                    self.nodes[idx].label = label;
                }
            }
            None => self.nodes.push(Node {
                id: id.to_string(),
                label: label.unwrap_or_else(|| id.to_string()),
            }),
        }
    }
}

/// Render a diagram description asynchronously.
///
/// Parsing and layout are cheap but unbounded in input size, so they
/// run on the blocking pool rather than the update loop.
pub async fn render(source: &str) -> Result<DiagramVisual, RenderError> {
    let owned = source.to_string();
    let result = tokio::task::spawn_blocking(move || parse(&owned).map(|g| layout(&g))).await;
    match result {
        Ok(rendered) => rendered,
        Err(e) => Err(RenderError::new(format!("render task failed: {e}"), source)),
    }
}

/// Parse a mermaid-flowchart description.
pub fn parse(source: &str) -> Result<DiagramGraph, RenderError> {
    let mut lines = source
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, l)| !l.is_empty() && !l.starts_with("%%"));

    let Some((_, header)) = lines.next() else {
        return Err(RenderError::new("empty diagram description", source));
    };

    let mut header_words = header.split_whitespace();
    let keyword = header_words.next().unwrap_or_default();
    if keyword != "graph" && keyword != "flowchart" {
        return Err(RenderError::new(
            format!("expected 'graph' or 'flowchart' header, found '{keyword}'"),
            source,
        ));
    }
    if let Some(dir) = header_words.next() {
        if !matches!(dir, "TD" | "TB" | "LR" | "RL" | "BT") {
            return Err(RenderError::new(
                format!("unknown flow direction '{dir}'"),
                source,
            ));
        }
    }

    let mut graph = DiagramGraph::default();
    for (line_no, line) in lines {
        parse_statement(&mut graph, line)
            .map_err(|msg| RenderError::new(format!("line {}: {msg}", line_no + 1), source))?;
    }

    if graph.nodes.is_empty() {
        return Err(RenderError::new("diagram declares no nodes", source));
    }
    Ok(graph)
}

/// Parse one statement: either a standalone node declaration or an
/// edge between two (possibly labelled) endpoints.
fn parse_statement(graph: &mut DiagramGraph, line: &str) -> Result<(), String> {
    let (from_id, from_label, rest) = parse_endpoint(line)?;
    let rest = rest.trim_start();

    if rest.is_empty() {
        graph.upsert(&from_id, from_label);
        return Ok(());
    }

    let (edge_label, rest) = parse_arrow(rest)?;
    let (to_id, to_label, tail) = parse_endpoint(rest.trim_start())?;
    if !tail.trim().is_empty() {
        return Err(format!("trailing input '{}'", tail.trim()));
    }

    graph.upsert(&from_id, from_label);
    graph.upsert(&to_id, to_label);
    graph.edges.push(Edge {
        from: from_id,
        to: to_id,
        label: edge_label,
    });
    Ok(())
}

/// Parse `-->`, `---`, or `-->|label|`, returning the edge label and
/// the remaining input.
fn parse_arrow(input: &str) -> Result<(Option<String>, &str), String> {
    let rest = if let Some(rest) = input.strip_prefix("-->") {
        rest
    } else if let Some(rest) = input.strip_prefix("---") {
        rest
    } else {
        return Err(format!("expected '-->' or '---', found '{input}'"));
    };

    let rest = rest.trim_start();
    if let Some(after) = rest.strip_prefix('|') {
        let Some(close) = after.find('|') else {
            return Err("unterminated edge label".to_string());
        };
        let label = after[..close].trim().to_string();
        let label = (!label.is_empty()).then_some(label);
        Ok((label, &after[close + 1..]))
    } else {
        Ok((None, rest))
    }
}

/// Parse a node endpoint: an identifier with an optional bracketed
/// label (`id`, `id[Label]`, `id(Label)`, `id{Label}`, `id((Label))`).
fn parse_endpoint(input: &str) -> Result<(String, Option<String>, &str), String> {
    let id_len = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(input.len());
    if id_len == 0 {
        return Err(format!("expected a node identifier, found '{input}'"));
    }
    let id = &input[..id_len];
    let rest = &input[id_len..];

    let (open, close) = match rest.chars().next() {
        Some('[') => ('[', ']'),
        Some('(') => ('(', ')'),
        Some('{') => ('{', '}'),
        _ => return Ok((id.to_string(), None, rest)),
    };

    let inner = &rest[1..];
    let Some(end) = inner.find(close) else {
        return Err(format!("unclosed '{open}' in node '{id}'"));
    };
    let label = inner[..end].trim_matches(|c| c == '(' || c == ')').trim();
    let label = (!label.is_empty()).then(|| label.to_string());

    // Double-round nodes close with `))`.
    let mut tail = &inner[end + 1..];
    if open == '(' && tail.starts_with(')') {
        tail = &tail[1..];
    }
    Ok((id.to_string(), label, tail))
}

/// Depth of each node: the longest edge distance from any root.
///
/// Relaxation is bounded by the node count, so cyclic graphs settle
/// instead of looping; nodes in a cycle keep the depth of their first
/// declaration pass.
fn node_depths(graph: &DiagramGraph) -> HashMap<String, usize> {
    let mut depth: HashMap<String, usize> =
        graph.nodes.iter().map(|n| (n.id.clone(), 0)).collect();

    for _ in 0..graph.nodes.len() {
        let mut changed = false;
        for edge in &graph.edges {
            let from = depth.get(&edge.from).copied().unwrap_or(0);
            let entry = depth.entry(edge.to.clone()).or_insert(0);
            if *entry < from + 1 {
                *entry = from + 1;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    depth
}

/// Lay the parsed graph out as text: one row of boxes per depth layer,
/// then the edge list.
fn layout(graph: &DiagramGraph) -> DiagramVisual {
    let depths = node_depths(graph);
    let max_depth = depths.values().copied().max().unwrap_or(0);

    let mut lines = Vec::new();
    for layer in 0..=max_depth {
        let boxes: Vec<&Node> = graph
            .nodes
            .iter()
            .filter(|n| depths.get(&n.id).copied().unwrap_or(0) == layer)
            .collect();
        if boxes.is_empty() {
            continue;
        }
        if layer > 0 {
            lines.push("      │".to_string());
            lines.push("      ▼".to_string());
        }
        lines.extend(layer_rows(&boxes));
    }

    if !graph.edges.is_empty() {
        lines.push(String::new());
        for edge in &graph.edges {
            let from = display_label(graph, &edge.from);
            let to = display_label(graph, &edge.to);
            match &edge.label {
                Some(label) => lines.push(format!("  {from} ──▶ {to}  ({label})")),
                None => lines.push(format!("  {from} ──▶ {to}")),
            }
        }
    }

    DiagramVisual { lines }
}

fn display_label<'a>(graph: &'a DiagramGraph, id: &'a str) -> &'a str {
    graph
        .node_index(id)
        .map(|idx| graph.nodes[idx].label.as_str())
        .unwrap_or(id)
}

/// Render one layer of nodes as side-by-side boxes (three rows).
fn layer_rows(boxes: &[&Node]) -> Vec<String> {
    let mut top = String::new();
    let mut mid = String::new();
    let mut bottom = String::new();
    for node in boxes {
        let width = node.label.chars().count() + 2;
        top.push_str(&format!("┌{}┐  ", "─".repeat(width)));
        mid.push_str(&format!("│ {} │  ", node.label));
        bottom.push_str(&format!("└{}┘  ", "─".repeat(width)));
    }
    vec![
        top.trim_end().to_string(),
        mid.trim_end().to_string(),
        bottom.trim_end().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_chain() {
        let graph = parse("graph TD\n  A[Client] --> B[Gateway]\n  B --> C[Service]").unwrap();
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.nodes[0].label, "Client");
        // B picked up its label from the first statement.
        assert_eq!(graph.nodes[1].label, "Gateway");
    }

    #[test]
    fn test_parse_edge_label() {
        let graph = parse("graph LR\n  A -->|publishes| B").unwrap();
        assert_eq!(graph.edges[0].label.as_deref(), Some("publishes"));
    }

    #[test]
    fn test_parse_node_shapes() {
        let graph = parse("flowchart TD\n  A(Round)\n  B{Decision}\n  C((Circle))").unwrap();
        let labels: Vec<&str> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Round", "Decision", "Circle"]);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let graph = parse("graph TD\n\n  %% a comment\n  A --> B\n").unwrap();
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_parse_rejects_missing_header() {
        let err = parse("A --> B").unwrap_err();
        assert!(err.message.contains("header"));
        assert_eq!(err.source, "A --> B");
    }

    #[test]
    fn test_parse_rejects_garbage_statement_with_line_number() {
        let source = "graph TD\n  A --> B\n  ???";
        let err = parse(source).unwrap_err();
        assert!(err.message.starts_with("line 3"));
        // The verbatim source rides along for the fallback view.
        assert_eq!(err.source, source);
    }

    #[test]
    fn test_parse_rejects_unknown_direction() {
        assert!(parse("graph XX\nA --> B").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_description() {
        assert!(parse("   \n  ").is_err());
    }

    #[test]
    fn test_layout_layers_follow_edge_depth() {
        let graph = parse("graph TD\n  A[Client] --> B[API]\n  B --> C[DB]").unwrap();
        let visual = layout(&graph);
        let text = visual.lines.join("\n");

        let client = text.find("Client").unwrap();
        let api = text.find("API").unwrap();
        let db = text.find("│ DB │").unwrap();
        assert!(client < api && api < db);
        assert!(text.contains("Client ──▶ API"));
    }

    #[test]
    fn test_layout_survives_cycles() {
        let graph = parse("graph TD\n  A --> B\n  B --> A").unwrap();
        let visual = layout(&graph);
        assert!(!visual.lines.is_empty());
    }

    #[test]
    fn test_layout_groups_siblings_in_one_layer() {
        let graph = parse("graph TD\n  A --> B\n  A --> C").unwrap();
        let visual = layout(&graph);
        let row = visual
            .lines
            .iter()
            .find(|l| l.contains("│ B │"))
            .expect("B row");
        assert!(row.contains("│ C │"), "siblings share a layer: {row}");
    }

    #[tokio::test]
    async fn test_render_failure_carries_source_verbatim() {
        let source = "not a diagram";
        let err = render(source).await.unwrap_err();
        assert_eq!(err.source, source);
    }

    #[tokio::test]
    async fn test_render_success() {
        let visual = render("graph TD\n  A[Auth] --> B[Chat]").await.unwrap();
        assert!(visual.lines.iter().any(|l| l.contains("Auth")));
    }

    #[test]
    fn test_attempt_ids_are_distinct() {
        // Random 64-bit ids; a collision here would be astronomically
        // unlikely and indicate a broken generator.
        let a = RenderAttempt::new();
        let b = RenderAttempt::new();
        assert_ne!(a, b);
    }
}
