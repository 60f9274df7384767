use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use protfeat::features::{self, FeatureOpt, RunMeta};
use protfeat::io::{self, output, InputFormat};
use protfeat::util::vocab;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "protfeat", author, version, about = "One-hot and composition features for protein sequences", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level", global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode every record of a CSV (id,sequence) or FASTA file
    Encode {
        /// Input file
        input: String,
        /// Input format (guessed from the extension if omitted)
        #[arg(long = "input-format", value_enum)]
        input_format: Option<InputFormat>,
        /// Output path; prints a preview to stdout if omitted
        #[arg(short, long)]
        out: Option<String>,
        /// Output format (`.bin` -> bincode, otherwise json)
        #[arg(long = "output-format", value_enum)]
        output_format: Option<output::OutputFormat>,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        /// Number of records shown in the preview
        #[arg(long = "head", default_value_t = 5)]
        head: usize,
    },
    /// Print the residue vocabulary
    Vocab,
}

fn init_logging(level: &str) -> Result<()> {
    let level = match level.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;
    match cli.command {
        Commands::Encode { input, input_format, out, output_format, threads, head } => {
            run_encode(&input, input_format, out.as_deref(), output_format, FeatureOpt { threads }, head)
        }
        Commands::Vocab => run_vocab(),
    }
}

fn run_encode(
    input: &str,
    input_format: Option<InputFormat>,
    out_path: Option<&str>,
    output_format: Option<output::OutputFormat>,
    opt: FeatureOpt,
    head: usize,
) -> Result<()> {
    let records = io::load_records(input, input_format)?;
    if records.is_empty() {
        anyhow::bail!("input file '{}' contains no sequence records", input);
    }

    let set = features::featurize_batch(&records, &opt, RunMeta::capture(input))?;

    match out_path {
        Some(p) => {
            output::save_feature_set(&set, p, output_format)?;
            info!(path = p, records = set.len(), "features saved");
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = std::io::BufWriter::new(stdout.lock());
            output::write_preview(&mut lock, &set, head)?;
            lock.flush()?;
        }
    }
    Ok(())
}

fn run_vocab() -> Result<()> {
    let v = vocab::build_vocabulary();
    for (symbol, index) in v.iter() {
        let note = if index == v.pad_index() { "\tpadding" } else { "" };
        println!("{}\t{}{}", index, symbol, note);
    }
    Ok(())
}
