use anyhow::{Context, Result};
use itertools::Itertools;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

const HITS_MARKER: &str = "Sequences producing significant alignments:";

/// Extracts the top hit identifiers from a plain-text BLAST report and writes
/// them to `writer`, deduplicated and in ascending lexicographic order, one
/// per line.
///
/// A `Query=` line opens a new query block (and closes any hits section left
/// open). The hits section starts at the marker line and ends at the first
/// blank line or alignment-detail line (`>`); inside it, each line's first
/// whitespace-delimited token is taken as the hit identifier.
///
/// Returns the number of unique identifiers written.
pub fn extract_top_hits(input: &str, writer: &mut impl Write) -> Result<usize> {
    let file = File::open(input).with_context(|| format!("Unable to open file {input}"))?;
    let reader = BufReader::new(file);

    let mut hits: Vec<String> = Vec::new();
    let mut in_hits = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.starts_with("Query=") {
            debug!("entering query block: {line}");
            in_hits = false;
            continue;
        }

        if line.contains(HITS_MARKER) {
            in_hits = true;
            continue;
        }

        if in_hits {
            if line.is_empty() || line.starts_with('>') {
                in_hits = false;
                continue;
            }

            // a trimmed, non-empty line always has a first token
            if let Some(token) = line.split_whitespace().next() {
                hits.push(token.to_string());
            }
        }
    }

    let unique: Vec<String> = hits.into_iter().sorted().dedup().collect();
    for hit in &unique {
        writeln!(writer, "{hit}")?;
    }

    Ok(unique.len())
}
