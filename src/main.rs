extern crate env_logger;
#[macro_use]
extern crate log;
use std::{
    fs::File,
    io::{prelude::*, stdout, BufWriter},
    path::Path,
};

use anyhow::Result;
use clap::Parser;

mod blast;
mod bounds;
mod cli;
mod fasta;
mod fastq;
mod filter;
mod metrics;
mod transform;

use cli::{Cli, Commands};
use filter::FilterOpts;

/// Creates a `BufWriter` for the given output option. This allows for an output file to be passed
/// or otherwise will default to using standard output.
///
/// If `output` is `Some`, it creates a file at the specified path and returns a `BufWriter` for it.
/// If `output` is `None`, it returns a `BufWriter` for the standard output.
///
/// # Arguments
///
/// * `output` - An `Option` containing the path to the output file as a `String`.
///
/// # Returns
///
/// A `Result` containing a `BufWriter` that implements `Write`.
fn get_writer(output: &Option<String>) -> Result<impl Write> {
    // get output as a BufWriter - equal to stdout if None
    let writer = BufWriter::new(match output {
        Some(ref x) => {
            let file = File::create(Path::new(x))?;
            Box::new(file) as Box<dyn Write + Send>
        }
        None => Box::new(stdout()) as Box<dyn Write + Send>,
    });
    Ok(writer)
}

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    println!("seqsift v{}", cli::VERSION);

    match &cli.command {
        Commands::Filter {
            file,
            output,
            gc,
            len,
            qual,
        } => {
            let opts = FilterOpts {
                gc: bounds::normalize(*gc, 0.0),
                len: bounds::normalize(*len, 0.0),
                min_quality: *qual,
            };

            let out_path = filter::filter_fastq_file(file, output.as_deref(), &opts)?;
            info!("Completed filtering to {}", out_path.display());
        }
        Commands::Oneline { file, output } => {
            let out_path = fasta::to_oneline(file, output.as_deref())?;
            info!("Completed reformatting to {}", out_path.display());
        }
        Commands::BlastHits { file, output } => {
            let mut writer = get_writer(output)?;

            let count = blast::extract_top_hits(file, &mut writer)?;
            writer.flush()?;

            info!("Extracted {count} unique hits");
        }
        Commands::Transform { args } => {
            for result in transform::run(args)? {
                println!("{result}");
            }
        }
    };
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
