use thiserror::Error;

/// Every symbol a nucleic-acid sequence may contain.
const ALLOWED: &[u8] = b"ATUGCatugc";

#[derive(Error, Debug)]
pub enum TransformErr {
    #[error("provide at least one sequence and a procedure name")]
    NotEnoughArguments,

    #[error(
        "unknown procedure: {name}
supported procedures:
    is_nucleic_acid, transcribe, reverse, complement, reverse_complement"
    )]
    UnknownProcedure { name: String },
}

/// Whether `seq` is a valid nucleic-acid sequence: non-empty, drawn from the
/// allowed alphabet, and not mixing `T` and `U`.
pub fn is_nucleic_acid(seq: &str) -> bool {
    if seq.is_empty() {
        return false;
    }

    if !seq.bytes().all(|b| ALLOWED.contains(&b)) {
        return false;
    }

    let has_t = seq.contains(['T', 't']);
    let has_u = seq.contains(['U', 'u']);
    !(has_t && has_u)
}

/// DNA-to-RNA transcription: `T` becomes `U`, case preserved.
pub fn transcribe(seq: &str) -> String {
    seq.chars()
        .map(|c| match c {
            'T' => 'U',
            't' => 'u',
            other => other,
        })
        .collect()
}

pub fn reverse(seq: &str) -> String {
    seq.chars().rev().collect()
}

/// RNA pairing applies iff the sequence contains `U` and no `T`.
fn uses_rna_pairs(seq: &str) -> bool {
    !seq.contains(['T', 't']) && seq.contains(['U', 'u'])
}

/// Complements each symbol, keeping case. Pairing rules are chosen per
/// sequence (see `uses_rna_pairs`); symbols outside the alphabet pass
/// through unchanged.
pub fn complement(seq: &str) -> String {
    let rna = uses_rna_pairs(seq);

    seq.chars()
        .map(|c| match c {
            'A' if rna => 'U',
            'a' if rna => 'u',
            'U' if rna => 'A',
            'u' if rna => 'a',
            'A' => 'T',
            'a' => 't',
            'T' => 'A',
            't' => 'a',
            'G' => 'C',
            'g' => 'c',
            'C' => 'G',
            'c' => 'g',
            other => other,
        })
        .collect()
}

pub fn reverse_complement(seq: &str) -> String {
    reverse(&complement(seq))
}

fn is_nucleic_acid_str(seq: &str) -> String {
    is_nucleic_acid(seq).to_string()
}

// fixed name-to-function table; resolved once, no dynamic dispatch
const PROCEDURES: &[(&str, fn(&str) -> String)] = &[
    ("is_nucleic_acid", is_nucleic_acid_str),
    ("transcribe", transcribe),
    ("reverse", reverse),
    ("complement", complement),
    ("reverse_complement", reverse_complement),
];

/// Applies a named procedure to one or more sequences. The last argument is
/// the procedure name; everything before it is a sequence. Returns one result
/// per sequence, in input order.
pub fn run(args: &[String]) -> Result<Vec<String>, TransformErr> {
    if args.len() < 2 {
        return Err(TransformErr::NotEnoughArguments);
    }

    let (seqs, procedure) = args.split_at(args.len() - 1);
    let name = procedure[0].as_str();

    let Some((_, func)) = PROCEDURES.iter().find(|(n, _)| *n == name) else {
        return Err(TransformErr::UnknownProcedure {
            name: name.to_string(),
        });
    };

    Ok(seqs.iter().map(|s| func(s)).collect())
}
