//! bitsfx CLI - Command-line interface for retro sound effect synthesis
//!
//! This binary lists the synthesis parameters, writes default parameter
//! files, and renders parameter files to PCM.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use bitsfx_cli::commands;
use bitsfx_synth::SynthConfig;

/// bitsfx - Retro Sound Effect Synthesizer
#[derive(Parser)]
#[command(name = "bitsfx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every synthesis parameter with its bounds and default
    Params {
        /// Output the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a parameter file and report length, peak, and PCM hash
    Render {
        /// Path to the parameter JSON file
        params: String,

        /// Seed for the noise wave shapes
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Output sample rate (44100 or 22050)
        #[arg(long, default_value_t = 44_100)]
        sample_rate: u32,

        /// Output bit depth (16 or 8)
        #[arg(long, default_value_t = 16)]
        bit_depth: u16,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write a parameter file holding every default value
    Defaults {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Params { json } => commands::params::run(json),
        Commands::Render {
            params,
            seed,
            sample_rate,
            bit_depth,
            json,
        } => {
            let config = SynthConfig {
                seed,
                sample_rate,
                bit_depth,
            };
            commands::render::run(&params, &config, json)
        }
        Commands::Defaults { output } => commands::defaults::run(output.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
