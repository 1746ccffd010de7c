use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Default output path: the `.fasta` suffix replaced by `_oneline.fasta`, or
/// `_oneline.fasta` appended when the input has no recognised suffix.
fn oneline_path(input: &str) -> PathBuf {
    match input.strip_suffix(".fasta") {
        Some(stem) => PathBuf::from(format!("{stem}_oneline.fasta")),
        None => PathBuf::from(format!("{input}_oneline.fasta")),
    }
}

/// Rewrites a multi-line FASTA file so each record's sequence sits on a
/// single line.
///
/// One forward pass: sequence lines are trimmed and accumulated under the
/// current header, and flushed as one concatenated line whenever a new
/// header appears or the input ends. Empty lines are ignored entirely and do
/// not separate records. A file without any header produces no records.
///
/// Returns the path written to.
pub fn to_oneline(input: &str, output: Option<&str>) -> Result<PathBuf> {
    let out_path = match output {
        Some(v) => PathBuf::from(v),
        None => oneline_path(input),
    };

    let file = File::open(input).with_context(|| format!("Unable to open file {input}"))?;
    let reader = BufReader::new(file);

    let out = File::create(&out_path)
        .with_context(|| format!("Unable to create file {}", out_path.display()))?;
    let mut writer = BufWriter::new(out);

    let mut header: Option<String> = None;
    let mut fragments: Vec<String> = Vec::new();
    let mut records = 0usize;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('>') {
            if let Some(prev) = header.take() {
                flush_record(&mut writer, &prev, &mut fragments)?;
                records += 1;
            }
            header = Some(line.to_string());
        } else {
            fragments.push(line.to_string());
        }
    }

    // the last record has no following header to trigger its flush
    if let Some(prev) = header.take() {
        flush_record(&mut writer, &prev, &mut fragments)?;
        records += 1;
    }

    writer.flush()?;
    info!("Wrote {} records to {}", records, out_path.display());

    Ok(out_path)
}

fn flush_record(
    writer: &mut impl Write,
    header: &str,
    fragments: &mut Vec<String>,
) -> std::io::Result<()> {
    writeln!(writer, "{header}")?;
    writeln!(writer, "{}", fragments.concat())?;
    fragments.clear();
    Ok(())
}
