//! accelcfg - accelerator interface configuration
//!
//! ## Commands
//!
//! - `resolve`: resolve a build config against a board registry
//! - `paths`: show the template paths the packaging step will read
//! - `precision`: parse and byte-align a precision string
//! - `boards`: list the boards of a registry

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use accel_cli::commands::{cmd_boards, cmd_paths, cmd_precision, cmd_resolve};

#[derive(Parser)]
#[command(name = "accelcfg")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Accelerator interface configuration", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a build config and print the resolved accelerator config as JSON
    Resolve {
        /// Board registry (JSON)
        #[arg(long, env = "ACCELCFG_BOARDS")]
        boards: PathBuf,

        /// Raw build config (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Board to use instead of the config's `Board` key
        #[arg(long)]
        board: Option<String>,

        /// Model input tensor name (repeatable)
        #[arg(long = "input", default_value = "input")]
        inputs: Vec<String>,

        /// Model output tensor name (repeatable)
        #[arg(long = "output", default_value = "output")]
        outputs: Vec<String>,

        /// Write the config with corrections applied to this path
        #[arg(long)]
        write_back: Option<PathBuf>,
    },

    /// Print driver, wrapper, constraints and tcl script paths
    Paths {
        /// Board registry (JSON)
        #[arg(long, env = "ACCELCFG_BOARDS")]
        boards: PathBuf,

        /// Raw build config (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Board to use instead of the config's `Board` key
        #[arg(long)]
        board: Option<String>,
    },

    /// Parse a precision string and show its byte-aligned wire type
    Precision {
        /// e.g. `ap_fixed<13,5>`, `ap_uint<12>`, `float`
        spec: String,
    },

    /// List boards in a registry
    Boards {
        /// Board registry (JSON)
        #[arg(long, env = "ACCELCFG_BOARDS")]
        boards: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    accel_config::init_tracing(cli.json, level);

    let output = match cli.command {
        Commands::Resolve {
            boards,
            config,
            board,
            inputs,
            outputs,
            write_back,
        } => cmd_resolve(
            &boards,
            &config,
            board.as_deref(),
            &inputs,
            &outputs,
            write_back.as_deref(),
        )?,
        Commands::Paths {
            boards,
            config,
            board,
        } => cmd_paths(&boards, &config, board.as_deref())?,
        Commands::Precision { spec } => cmd_precision(&spec)?,
        Commands::Boards { boards } => cmd_boards(&boards)?,
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
