use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::{Parser, Subcommand};

use crate::bounds::ArgBounds;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 seqsift version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   tools for filtering sequencing reads and reformatting FASTA/BLAST output";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    flatten_help = true,
    styles = STYLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter reads in a .fastq file by GC content, length, and mean quality
    #[command(arg_required_else_help = true)]
    Filter {
        /// the input .fastq file
        file: String,

        /// name of the output file, which is always placed under the
        /// `filtered/` directory. defaults to the input file name.
        #[arg(short)]
        output: Option<String>,

        /// keep reads whose GC percentage lies within the given bounds.
        /// bounds are either a pair `low,high` (both inclusive) or a single
        /// number, which is read as the upper bound. for example:
        ///     --gc 20,80
        ///     --gc 80
        #[arg(
            long,
            value_parser = |x: &str| ArgBounds::try_from(x),
            default_value = "0,100",
            verbatim_doc_comment
        )]
        gc: ArgBounds,

        /// keep reads whose length lies within the given bounds.
        /// see the docs for `--gc` for the bounds format.
        #[arg(
            long,
            value_parser = |x: &str| ArgBounds::try_from(x),
            default_value = "0,4294967296",
            verbatim_doc_comment
        )]
        len: ArgBounds,

        /// keep reads whose mean Phred-33 quality is at least this value
        #[arg(long, default_value_t = 0.0)]
        qual: f64,
    },

    /// Join the wrapped sequence lines of a .fasta file into one line each
    #[command(arg_required_else_help = true)]
    Oneline {
        /// the input .fasta file
        file: String,

        /// the output file. defaults to the input path with its `.fasta`
        /// suffix replaced by `_oneline.fasta`.
        #[arg(short)]
        output: Option<String>,
    },

    /// Extract the top hit of each query from a BLAST text report
    #[command(arg_required_else_help = true)]
    BlastHits {
        /// the BLAST report file
        file: String,

        /// the output file, one identifier per line, sorted. defaults to
        /// standard output.
        #[arg(short)]
        output: Option<String>,
    },

    /// Apply a DNA/RNA procedure to one or more sequences
    #[command(arg_required_else_help = true)]
    Transform {
        /// one or more sequences, followed by the procedure name.
        /// supported procedures:
        ///     is_nucleic_acid, transcribe, reverse,
        ///     complement, reverse_complement
        #[arg(num_args = 1.., verbatim_doc_comment)]
        args: Vec<String>,
    },
}
