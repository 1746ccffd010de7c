use crate::bounds::Interval;
use crate::fastq::{self, Record, ReadCollection};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct FilterOpts {
    pub gc: Interval,
    pub len: Interval,
    pub min_quality: f64,
}

/// Whether a single read passes every filter. All three checks are
/// independent, so their order carries no meaning.
pub fn filter(read: &Record, opts: &FilterOpts) -> bool {
    opts.len.contains(read.len() as f64)
        && opts.gc.contains(read.gc_content())
        && read.mean_quality() >= opts.min_quality
}

/// Keeps the subset of `reads` passing the filter, in their original order.
/// Filtering is pure selection; no read is modified.
pub fn filter_reads(reads: ReadCollection, opts: &FilterOpts) -> ReadCollection {
    reads
        .into_iter()
        .filter(|(_, read)| filter(read, opts))
        .collect()
}

/// Runs the whole filter pipeline: parse `input`, filter, and write the
/// survivors to `filtered/<name>` under the working directory, where `name`
/// defaults to the input's file name. The `filtered/` directory is created
/// if missing; an existing destination makes the write fail.
///
/// Returns the output path.
pub fn filter_fastq_file(
    input: &str,
    output: Option<&str>,
    opts: &FilterOpts,
) -> Result<PathBuf> {
    let now = std::time::Instant::now();

    let reads = fastq::read_fastq(input)?;
    let total = reads.len();

    let kept = filter_reads(reads, opts);

    let name = match output {
        Some(v) => v.to_string(),
        None => Path::new(input)
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.to_string()),
    };
    let out_path = Path::new("filtered").join(name);

    fastq::write_fastq(&kept, &out_path)?;

    info!(
        "Stats: {} reads kept, {} reads removed, {:.1}s runtime",
        kept.len(),
        total - kept.len(),
        now.elapsed().as_secs_f64()
    );

    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::{normalize, ArgBounds};

    fn read(id: &str, seq: &str, qual: &str) -> (String, Record) {
        (
            id.to_string(),
            Record {
                id: id.to_string(),
                seq: seq.to_string(),
                qual: qual.to_string(),
            },
        )
    }

    fn no_op_opts() -> FilterOpts {
        FilterOpts {
            gc: normalize(ArgBounds::Range(0.0, 100.0), 0.0),
            len: normalize(ArgBounds::Range(0.0, 4294967296.0), 0.0),
            min_quality: 0.0,
        }
    }

    #[test]
    fn length_bounds_exclude_short_reads() {
        let reads: ReadCollection =
            [read("@r1", "ATGC", "IIII"), read("@r2", "AT", "II")].into();

        let opts = FilterOpts {
            len: normalize(ArgBounds::Range(3.0, 10.0), 0.0),
            ..no_op_opts()
        };

        let kept = filter_reads(reads, &opts);
        assert_eq!(kept.len(), 1);
        assert!(kept.contains_key("@r1"));
    }

    #[test]
    fn boundary_values_pass() {
        let reads: ReadCollection = [read("@r1", "ATGC", "5555")].into();

        // length 4, GC 50%, mean quality 20: all exactly on a boundary
        let opts = FilterOpts {
            gc: normalize(ArgBounds::Range(50.0, 50.0), 0.0),
            len: normalize(ArgBounds::Range(4.0, 4.0), 0.0),
            min_quality: 20.0,
        };

        assert_eq!(filter_reads(reads, &opts).len(), 1);
    }

    #[test]
    fn scalar_gc_bound_is_an_upper_bound() {
        let reads: ReadCollection =
            [read("@gc100", "GGCC", "IIII"), read("@gc0", "ATAT", "IIII")].into();

        let opts = FilterOpts {
            gc: normalize(ArgBounds::Scalar(80.0), 0.0),
            ..no_op_opts()
        };

        let kept = filter_reads(reads, &opts);
        assert_eq!(kept.len(), 1);
        assert!(kept.contains_key("@gc0"));
    }

    #[test]
    fn quality_threshold_is_inclusive() {
        // '5' is code point 53, Q20
        let reads: ReadCollection =
            [read("@ok", "ATGC", "5555"), read("@low", "ATGC", "!!!!")].into();

        let opts = FilterOpts {
            min_quality: 20.0,
            ..no_op_opts()
        };

        let kept = filter_reads(reads, &opts);
        assert_eq!(kept.len(), 1);
        assert!(kept.contains_key("@ok"));
    }

    #[test]
    fn default_bounds_keep_everything() {
        let reads: ReadCollection =
            [read("@r1", "ATGC", "IIII"), read("@r2", "", "")].into();

        assert_eq!(filter_reads(reads, &no_op_opts()).len(), 2);
    }

    #[test]
    fn filtering_is_idempotent() {
        let reads: ReadCollection = [
            read("@r1", "ATGC", "IIII"),
            read("@r2", "AT", "II"),
            read("@r3", "GGGGGG", "IIIIII"),
        ]
        .into();

        let opts = FilterOpts {
            len: normalize(ArgBounds::Range(3.0, 10.0), 0.0),
            ..no_op_opts()
        };

        let once = filter_reads(reads, &opts);
        let twice = filter_reads(once.clone(), &opts);
        assert_eq!(once, twice);
    }

    #[test]
    fn survivors_keep_their_relative_order() {
        let reads: ReadCollection = [
            read("@r1", "ATGC", "IIII"),
            read("@r2", "A", "I"),
            read("@r3", "GGGG", "IIII"),
        ]
        .into();

        let opts = FilterOpts {
            len: normalize(ArgBounds::Range(2.0, 10.0), 0.0),
            ..no_op_opts()
        };

        let kept = filter_reads(reads, &opts);
        let ids: Vec<&String> = kept.keys().collect();
        assert_eq!(ids, vec!["@r1", "@r3"]);
    }
}
