//! Network table ingestion.
//!
//! Builds a [`Graph`] from a comma-separated table of connections, one row
//! per undirected connection: `from,to,line,label`. The first row is a
//! header. Ingestion is permissive: malformed rows are skipped with a
//! warning rather than failing the load.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use tracing::warn;

use crate::network::Graph;

/// Error loading the network table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Underlying I/O failure
    #[error("failed to read network data: {0}")]
    Io(#[from] io::Error),
}

/// Loads a network graph from a file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    load_from_reader(File::open(path)?)
}

/// Loads a network graph from any reader.
///
/// Expects a header row followed by `from,to,line,label` rows. Fields are
/// trimmed; columns beyond the fourth are ignored. Rows that are blank are
/// skipped silently; rows with missing fields or an unparseable line id are
/// skipped with a warning.
///
/// # Errors
///
/// Fails only on I/O; bad rows never abort the load.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Graph, LoadError> {
    let mut graph = Graph::new();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if index == 0 {
            continue; // header row
        }
        if line.trim().is_empty() {
            continue;
        }

        let Some(row) = parse_row(&line) else {
            warn!(row = index + 1, "skipping malformed network row");
            continue;
        };

        graph.add_station(row.from);
        graph.add_station(row.to);
        graph.add_connection(row.from, row.to, row.line, row.label);
    }

    Ok(graph)
}

struct Row<'a> {
    from: &'a str,
    to: &'a str,
    line: u32,
    label: &'a str,
}

fn parse_row(line: &str) -> Option<Row<'_>> {
    let mut fields = line.split(',');
    let from = fields.next()?.trim();
    let to = fields.next()?.trim();
    let line_id = fields.next()?.trim().parse().ok()?;
    let label = fields.next()?.trim();

    if from.is_empty() || to.is_empty() {
        return None;
    }

    Some(Row {
        from,
        to,
        line: line_id,
        label,
    })
}
