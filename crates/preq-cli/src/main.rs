mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "preq",
    version,
    about = "Contractor roster extraction tool for TDOT prequalification reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract contractor records from a report PDF and write them to CSV
    Extract {
        /// Path to the report PDF
        input_file: PathBuf,

        /// Output CSV file or directory (default: TDOT_Prequalified_Contractors_As_Of_<date>.csv)
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Carry a record still open at a page break onto the next page
        #[arg(long)]
        span_pages: bool,
    },
    /// Parse a report PDF into structured records (without writing CSV)
    Parse {
        /// Path to the report PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed records to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            out,
            span_pages,
        } => commands::extract::run(input_file, out, span_pages),
        Commands::Parse {
            input_file,
            output,
            out,
        } => commands::parse::run(input_file, &output, out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
