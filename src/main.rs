use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, LevelFilter};
use scel2ibus::{convert_file, plan_conversions, ConvertOptions, PlannedConversion};

/// Convert Sogou Pinyin .scel dictionaries into ibus-libpinyin phrase tables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// .scel files or directories to search recursively
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Write outputs here instead of next to each input
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Reject inputs larger than this many bytes
    #[arg(long, default_value_t = ConvertOptions::default().max_input_bytes)]
    max_bytes: u64,

    /// Fail instead of replacing existing output files
    #[arg(long)]
    no_overwrite: bool,

    /// Log decoding details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    } else if std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(LevelFilter::Info);
    }
    logger.init();

    let options = ConvertOptions {
        max_input_bytes: args.max_bytes,
        overwrite: !args.no_overwrite,
    };

    if let Some(dir) = &args.out_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            error!("Cannot create {}: {}", dir.display(), e);
            return ExitCode::FAILURE;
        }
    }

    let (planned, rejected) = plan_conversions(&args.paths, args.out_dir.as_deref());
    let mut failed = rejected.len();
    for (path, e) in &rejected {
        error!("{}: {}", path.display(), e);
    }

    let mut converted = 0usize;
    for PlannedConversion { input, output } in &planned {
        println!("Processing {}", input.display());
        match convert_file(input, output, &options) {
            Ok(report) => {
                converted += 1;
                println!("  {} entries -> {}", report.entries, report.output.display());
            }
            Err(e) => {
                failed += 1;
                eprintln!("  ERROR: {}: {}", input.display(), e);
            }
        }
    }

    println!("{} converted, {} failed", converted, failed);
    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
