//! DIMACS text format, read and write.
//!
//! The format is line-oriented: one `p edge <nodes> <edges>` problem line,
//! `c` comment lines anywhere, and one `e <from> <to> [weight]` line per
//! edge (`a` is accepted as a synonym on input, as some generators emit it
//! for arcs). Node names are parsed with [`FromStr`], so any name type that
//! can round-trip through its `Display` form works.
//!
//! Parsing and graph construction are decoupled: [`parse_dimacs`] yields a
//! [`ParsedGraph`] of raw edges and weights, and [`load_dimacs`] /
//! [`load_dimacs_weighted`] pour one into any backend through the storage
//! contract.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::weighted_list::DEFAULT_WEIGHT;
use crate::graph::{GraphError, GraphStore, NodeName, WeightedGraphStore};

/// Errors from reading or writing DIMACS text.
///
/// Parse errors carry the 1-based line number and the offending line so the
/// caller can point at the problem in the input.
#[derive(Error, Debug)]
pub enum DimacsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: second problem line, only one is allowed")]
    DuplicateHeader { line: usize },

    #[error("line {line}: edge before the problem line")]
    EdgeBeforeHeader { line: usize },

    #[error("line {line}: malformed problem line: {text:?}")]
    MalformedHeader { line: usize, text: String },

    #[error("line {line}: malformed edge line: {text:?}")]
    MalformedEdge { line: usize, text: String },

    #[error("line {line}: unknown line type {found:?}")]
    UnknownLineStart { line: usize, found: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type DimacsResult<T> = Result<T, DimacsError>;

/// The raw content of a DIMACS file, before it is poured into a backend.
///
/// `weights` is either empty (no edge carried a weight) or parallel to
/// `edges`; a file where only some edges carry weights is rejected at parse
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedGraph<N> {
    pub declared_nodes: usize,
    pub edges: Vec<(N, N)>,
    pub weights: Vec<f64>,
}

impl<N> ParsedGraph<N> {
    /// True when every edge line carried a weight.
    pub fn is_weighted(&self) -> bool {
        !self.weights.is_empty() && self.weights.len() == self.edges.len()
    }
}

fn parse_name<N>(token: &str, line: usize, text: &str) -> DimacsResult<N>
where
    N: FromStr,
{
    token.parse().map_err(|_| DimacsError::MalformedEdge {
        line,
        text: text.to_owned(),
    })
}

/// Parses DIMACS text from any buffered reader.
///
/// Blank lines are skipped; `c` lines are ignored. Edge lines before the
/// problem line, a second problem line, and edge lines with a weight on only
/// part of the file are all errors. A mismatch between the declared edge
/// count and the number of edge lines is tolerated with a warning, since
/// files in the wild are frequently sloppy about the header.
pub fn parse_dimacs<N, R>(reader: R) -> DimacsResult<ParsedGraph<N>>
where
    N: NodeName + FromStr,
    R: BufRead,
{
    let mut header: Option<(usize, usize)> = None;
    let mut edges: Vec<(N, N)> = Vec::new();
    let mut weights: Vec<f64> = Vec::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = line_index + 1;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let mut tokens = text.split_whitespace();
        // Non-empty after trim, so the first token exists.
        let Some(kind) = tokens.next() else { continue };

        match kind {
            "c" => {}
            "p" => {
                if header.is_some() {
                    return Err(DimacsError::DuplicateHeader { line: line_number });
                }
                // `p <format> <nodes> <edges>`; the format token is not
                // interpreted.
                let malformed = || DimacsError::MalformedHeader {
                    line: line_number,
                    text: text.to_owned(),
                };
                tokens.next().ok_or_else(malformed)?;
                let nodes: usize = tokens
                    .next()
                    .and_then(|t| t.parse().ok())
                    .ok_or_else(malformed)?;
                let declared_edges: usize = tokens
                    .next()
                    .and_then(|t| t.parse().ok())
                    .ok_or_else(malformed)?;
                header = Some((nodes, declared_edges));
            }
            "e" | "a" => {
                if header.is_none() {
                    return Err(DimacsError::EdgeBeforeHeader { line: line_number });
                }
                let malformed = || DimacsError::MalformedEdge {
                    line: line_number,
                    text: text.to_owned(),
                };
                let from = parse_name(tokens.next().ok_or_else(malformed)?, line_number, text)?;
                let to = parse_name(tokens.next().ok_or_else(malformed)?, line_number, text)?;

                if let Some(token) = tokens.next() {
                    let weight: f64 = token.parse().map_err(|_| malformed())?;
                    if weights.len() != edges.len() {
                        // Earlier edges had no weight.
                        return Err(malformed());
                    }
                    weights.push(weight);
                } else if !weights.is_empty() {
                    // Earlier edges had weights, this one does not.
                    return Err(malformed());
                }
                edges.push((from, to));
            }
            other => {
                return Err(DimacsError::UnknownLineStart {
                    line: line_number,
                    found: other.to_owned(),
                })
            }
        }
    }

    let Some((declared_nodes, declared_edges)) = header else {
        return Err(DimacsError::MalformedHeader {
            line: 0,
            text: String::from("missing problem line"),
        });
    };
    if declared_edges != edges.len() {
        tracing::warn!(
            declared = declared_edges,
            found = edges.len(),
            "edge count in problem line does not match edge lines"
        );
    }

    Ok(ParsedGraph {
        declared_nodes,
        edges,
        weights,
    })
}

/// Reads DIMACS text into an unweighted backend. Weights in the input, if
/// any, are dropped.
pub fn load_dimacs<N, G, R>(graph: &mut G, reader: R) -> DimacsResult<()>
where
    N: NodeName + FromStr,
    G: GraphStore<N> + ?Sized,
    R: BufRead,
{
    let parsed = parse_dimacs(reader)?;
    graph.add_edges(&parsed.edges);
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded DIMACS graph"
    );
    Ok(())
}

/// Reads DIMACS text into a weighted backend. Unweighted input gets the
/// default weight on every edge.
pub fn load_dimacs_weighted<N, G, R>(graph: &mut G, reader: R) -> DimacsResult<()>
where
    N: NodeName + FromStr,
    G: WeightedGraphStore<N> + ?Sized,
    R: BufRead,
{
    let parsed = parse_dimacs(reader)?;
    if parsed.weights.is_empty() {
        graph.add_edges_with_weight(&parsed.edges, DEFAULT_WEIGHT);
    } else {
        graph.add_edges_with_weights(&parsed.edges, &parsed.weights)?;
    }
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded weighted DIMACS graph"
    );
    Ok(())
}

/// Writes a graph as DIMACS text: one problem line, then one `e` line per
/// edge in the backend's reporting order.
pub fn write_dimacs<N, G, W>(graph: &G, mut writer: W) -> DimacsResult<()>
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
    W: Write,
{
    writeln!(writer, "p edge {} {}", graph.node_count(), graph.edge_count())?;
    for (from, to) in graph.edges() {
        writeln!(writer, "e {from} {to}")?;
    }
    Ok(())
}

/// Writes a weighted graph as DIMACS text, one `e <from> <to> <weight>` line
/// per edge.
pub fn write_dimacs_weighted<N, G, W>(graph: &G, mut writer: W) -> DimacsResult<()>
where
    N: NodeName,
    G: WeightedGraphStore<N> + ?Sized,
    W: Write,
{
    writeln!(writer, "p edge {} {}", graph.node_count(), graph.edge_count())?;
    for (from, to) in graph.edges() {
        let weight = graph.weight(&from, &to).unwrap_or(DEFAULT_WEIGHT);
        writeln!(writer, "e {from} {to} {weight}")?;
    }
    Ok(())
}

/// Parses a DIMACS file from disk.
pub fn read_dimacs_file<N, P>(path: P) -> DimacsResult<ParsedGraph<N>>
where
    N: NodeName + FromStr,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    parse_dimacs(BufReader::new(file))
}

/// Writes a graph to a DIMACS file on disk.
pub fn save_dimacs_file<N, G, P>(graph: &G, path: P) -> DimacsResult<()>
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
    P: AsRef<Path>,
{
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_dimacs(graph, &mut writer)?;
    writer.flush()?;
    tracing::debug!(path = %path.as_ref().display(), "saved DIMACS graph");
    Ok(())
}

/// Writes a weighted graph to a DIMACS file on disk, keeping the weights.
pub fn save_dimacs_file_weighted<N, G, P>(graph: &G, path: P) -> DimacsResult<()>
where
    N: NodeName,
    G: WeightedGraphStore<N> + ?Sized,
    P: AsRef<Path>,
{
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_dimacs_weighted(graph, &mut writer)?;
    writer.flush()?;
    tracing::debug!(path = %path.as_ref().display(), "saved weighted DIMACS graph");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{ListGraph, WeightedListGraph};

    const SMALL: &str = "c a comment\np edge 3 2\ne 1 2\ne 2 3\n";

    #[test]
    fn parses_header_and_edges() {
        let parsed: ParsedGraph<u32> = parse_dimacs(SMALL.as_bytes()).unwrap();

        assert_eq!(parsed.declared_nodes, 3);
        assert_eq!(parsed.edges, vec![(1, 2), (2, 3)]);
        assert!(!parsed.is_weighted());
    }

    #[test]
    fn parses_weighted_edges() {
        let text = "p edge 2 1\ne 1 2 2.5\n";
        let parsed: ParsedGraph<u32> = parse_dimacs(text.as_bytes()).unwrap();

        assert_eq!(parsed.weights, vec![2.5]);
        assert!(parsed.is_weighted());
    }

    #[test]
    fn rejects_edge_before_header() {
        let text = "e 1 2\np edge 2 1\n";
        let err = parse_dimacs::<u32, _>(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DimacsError::EdgeBeforeHeader { line: 1 }));
    }

    #[test]
    fn rejects_duplicate_header() {
        let text = "p edge 2 1\np edge 2 1\ne 1 2\n";
        let err = parse_dimacs::<u32, _>(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DimacsError::DuplicateHeader { line: 2 }));
    }

    #[test]
    fn rejects_mixed_weighted_and_unweighted_edges() {
        let text = "p edge 3 2\ne 1 2 1.0\ne 2 3\n";
        let err = parse_dimacs::<u32, _>(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DimacsError::MalformedEdge { line: 3, .. }));
    }

    #[test]
    fn rejects_unknown_line_type() {
        let text = "p edge 2 1\nx 1 2\n";
        let err = parse_dimacs::<u32, _>(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DimacsError::UnknownLineStart { line: 2, .. }
        ));
    }

    #[test]
    fn loads_into_unweighted_backend() {
        let mut graph: ListGraph<u32> = ListGraph::new();
        load_dimacs(&mut graph, SMALL.as_bytes()).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.has_edge(&1, &2));
    }

    #[test]
    fn loads_unweighted_input_with_default_weight() {
        let mut graph: WeightedListGraph<u32> = WeightedListGraph::new();
        load_dimacs_weighted(&mut graph, SMALL.as_bytes()).unwrap();

        assert_eq!(graph.weight(&1, &2), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn writes_and_reparses() {
        let mut graph: ListGraph<u32> = ListGraph::new();
        graph.add_edges(&[(1, 2), (2, 3)]);

        let mut buffer = Vec::new();
        write_dimacs(&graph, &mut buffer).unwrap();

        let parsed: ParsedGraph<u32> = parse_dimacs(buffer.as_slice()).unwrap();
        assert_eq!(parsed.edges.len(), 2);
        assert_eq!(parsed.declared_nodes, 3);
    }

    #[test]
    fn weighted_write_keeps_weights() {
        let mut graph: WeightedListGraph<u32> = WeightedListGraph::new();
        graph.add_weighted_edges(&[(1, 2, 4.5), (2, 3, 0.5)]);

        let mut buffer = Vec::new();
        write_dimacs_weighted(&graph, &mut buffer).unwrap();

        let parsed: ParsedGraph<u32> = parse_dimacs(buffer.as_slice()).unwrap();
        assert!(parsed.is_weighted());
        assert_eq!(parsed.weights, vec![4.5, 0.5]);
    }
}
