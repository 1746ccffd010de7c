use crate::metrics;
use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// A single FASTQ read. The `id` keeps the full header line, including the
/// leading `@`, so that serialization reproduces the header exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    pub seq: String,
    pub qual: String,
}

impl Record {
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn gc_content(&self) -> f64 {
        metrics::gc_content(&self.seq)
    }

    pub fn mean_quality(&self) -> f64 {
        metrics::mean_quality(&self.qual)
    }
}

/// Reads keyed by header line, in file order.
pub type ReadCollection = IndexMap<String, Record>;

#[derive(Error, Debug)]
pub enum WriteErr {
    #[error(
        "output file already exists:
    {path}
suggestion: remove it first, or pass a different output name with -o"
    )]
    DestinationExists { path: String },
}

/// Parses a FASTQ file into a `ReadCollection`.
///
/// The file is read in fixed 4-line frames: header, sequence, separator,
/// quality. A frame is kept only if the header starts with `@`, the separator
/// starts with `+`, and the sequence and quality lines have equal length.
/// Frames failing any check are skipped without error, and parsing ends
/// quietly when fewer than 4 lines remain.
///
/// Headers are not guaranteed unique by the format; when two frames share a
/// header, the later one replaces the earlier in the collection. Downstream
/// read counts rely on this last-wins behaviour.
pub fn read_fastq(path: &str) -> Result<ReadCollection> {
    let file = File::open(path).with_context(|| format!("Unable to open file {path}"))?;
    let mut lines = BufReader::new(file).lines();

    let mut reads = ReadCollection::new();

    loop {
        let Some(header) = lines.next() else { break };
        let (Some(seq), Some(sep), Some(qual)) = (lines.next(), lines.next(), lines.next())
        else {
            // incomplete trailing frame
            break;
        };
        let (header, seq, sep, qual) = (header?, seq?, sep?, qual?);

        if !header.starts_with('@') || !sep.starts_with('+') || seq.len() != qual.len() {
            debug!("skipping malformed record at {header}");
            continue;
        }

        reads.insert(header.clone(), Record { id: header, seq, qual });
    }

    Ok(reads)
}

/// Serializes a `ReadCollection` to `path` as 4-line FASTQ frames, in the
/// collection's iteration order.
///
/// The parent directory is created if missing. An existing destination is
/// never overwritten: the write fails with [`WriteErr::DestinationExists`]
/// and the file is left untouched. The existence check is a plain pre-check,
/// not a lock; concurrent writers to the same path must serialize externally.
pub fn write_fastq(reads: &ReadCollection, path: &Path) -> Result<()> {
    if path.exists() {
        bail!(WriteErr::DestinationExists {
            path: path.display().to_string()
        });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create directory {}", parent.display()))?;
        }
    }

    let file = File::create(path)
        .with_context(|| format!("Unable to create file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for rec in reads.values() {
        writeln!(writer, "{}\n{}\n+\n{}", rec.id, rec.seq, rec.qual)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parses_well_formed_frames() {
        let f = write_temp("@r1\nATGC\n+\nIIII\n@r2\nAT\n+\nII\n");
        let reads = read_fastq(f.path().to_str().unwrap()).unwrap();

        assert_eq!(reads.len(), 2);
        assert_eq!(reads["@r1"].seq, "ATGC");
        assert_eq!(reads["@r2"].qual, "II");
    }

    #[test]
    fn skips_frames_with_bad_markers_or_length() {
        // middle frame has a bad separator; last frame has mismatched lengths
        let f = write_temp(
            "@r1\nATGC\n+\nIIII\n@r2\nAT\nX\nII\n@r3\nATG\n+\nIIII\n@r4\nGG\n+\nII\n",
        );
        let reads = read_fastq(f.path().to_str().unwrap()).unwrap();

        let ids: Vec<&String> = reads.keys().collect();
        assert_eq!(ids, vec!["@r1", "@r4"]);
    }

    #[test]
    fn incomplete_trailing_frame_ends_parsing() {
        let f = write_temp("@r1\nATGC\n+\nIIII\n@r2\nAT\n+\n");
        let reads = read_fastq(f.path().to_str().unwrap()).unwrap();

        assert_eq!(reads.len(), 1);
        assert!(reads.contains_key("@r1"));
    }

    #[test]
    fn duplicate_header_keeps_the_later_read() {
        let f = write_temp("@r1\nAAAA\n+\nIIII\n@r1\nGGGG\n+\nIIII\n");
        let reads = read_fastq(f.path().to_str().unwrap()).unwrap();

        assert_eq!(reads.len(), 1);
        assert_eq!(reads["@r1"].seq, "GGGG");
    }

    #[test]
    fn round_trip_preserves_the_collection() {
        let f = write_temp("@r1 extra metadata\nATGC\n+\nIIII\n@r2\nAT\n+\n!I\n");
        let reads = read_fastq(f.path().to_str().unwrap()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.fastq");
        write_fastq(&reads, &out).unwrap();

        let reread = read_fastq(out.to_str().unwrap()).unwrap();
        assert_eq!(reads, reread);
    }

    #[test]
    fn refuses_to_overwrite_and_leaves_the_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.fastq");
        std::fs::write(&out, "existing content").unwrap();

        let mut reads = ReadCollection::new();
        reads.insert(
            "@r1".to_string(),
            Record {
                id: "@r1".to_string(),
                seq: "ATGC".to_string(),
                qual: "IIII".to_string(),
            },
        );

        let err = write_fastq(&reads, &out).unwrap_err();
        assert!(err.downcast_ref::<WriteErr>().is_some());
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "existing content");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/dir/out.fastq");

        write_fastq(&ReadCollection::new(), &out).unwrap();
        assert!(out.exists());
    }
}
