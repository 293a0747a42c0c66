//! Text formats for [`Graph`].
//!
//! Two distinct renderings exist and both are kept:
//!
//! - [`Graph::to_display_string`] — `[v0, v1, ..., vn-1]` rows (comma-space),
//!   the human-facing pretty format.
//! - [`fmt::Display`] — `[v0 v1 ... vn-1]` rows (space-separated), the stream
//!   format. [`FromStr`] and [`Graph::read_from`] parse it back, so
//!   `Display` output round-trips to an equal graph.
//!
//! Rows are joined by a single newline with no trailing newline in either
//! format.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{Error, Result};

use super::adjacency::Graph;

impl Graph {
    /// Renders the matrix with comma-separated rows: `[0, 1]\n[1, 0]`.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.render(", ")
    }

    /// Reads a graph from a stream in the space-separated line format.
    ///
    /// Consumes the reader to its end; each line becomes one matrix row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the reader fails, otherwise the same errors
    /// as [`FromStr`].
    pub fn read_from<R: BufRead>(mut reader: R) -> Result<Graph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    /// Writes the graph to a stream in the space-separated line format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write!(writer, "{self}").map_err(Error::Io)
    }

    fn render(&self, separator: &str) -> String {
        let rows: Vec<String> = self
            .matrix()
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
                format!("[{}]", cells.join(separator))
            })
            .collect();
        rows.join("\n")
    }
}

/// The stream format: space-separated rows, e.g. `[0 1]\n[1 0]`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(" "))
    }
}

/// Parses the space-separated line format.
///
/// Each line is one matrix row; surrounding `[` `]` brackets are optional so
/// that [`fmt::Display`] output parses back unchanged. Empty input yields the
/// empty graph.
impl FromStr for Graph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in s.lines() {
            let bare = line.trim().trim_start_matches('[').trim_end_matches(']');
            let row = bare
                .split_whitespace()
                .map(str::parse)
                .collect::<std::result::Result<Vec<i32>, _>>()?;
            rows.push(row);
        }
        Graph::try_from(rows)
    }
}
