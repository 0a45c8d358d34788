use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use host::{format_points, parse_seed, parse_seed_csv, run_prompt, teleport_batch, PromptConfig};
use valentine_core::Rect;

#[derive(Parser, Debug)]
#[command(name = "valentine")]
#[command(about = "Asks the question until the answer is yes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask interactively on stdin/stdout (default)
    Ask {
        /// Maximum number of YES banner lines (env: VALENTINE_BANNER_CAP)
        #[arg(long)]
        banner_cap: Option<u32>,
        /// Viewport width used for teleport sampling (env: VALENTINE_VIEWPORT_WIDTH)
        #[arg(long)]
        width: Option<f64>,
        /// Viewport height used for teleport sampling (env: VALENTINE_VIEWPORT_HEIGHT)
        #[arg(long)]
        height: Option<f64>,
    },
    /// Print deterministic teleport positions
    Teleport {
        #[arg(long, allow_negative_numbers = true)]
        width: f64,
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
        /// Single seed (decimal or 0x hex)
        #[arg(long, allow_negative_numbers = true, default_value = "0")]
        seed: String,
        /// Comma-separated seeds; overrides --seed
        #[arg(long, allow_negative_numbers = true)]
        seeds: Option<String>,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so the prompt output on stdout stays exact.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Ask {
        banner_cap: None,
        width: None,
        height: None,
    });

    match command {
        Commands::Ask {
            banner_cap,
            width,
            height,
        } => {
            let mut config = PromptConfig::from_env();
            if let Some(cap) = banner_cap {
                config.banner_cap = cap;
            }
            if let Some(width) = width {
                config.viewport.width = width;
            }
            if let Some(height) = height {
                config.viewport.height = height;
            }
            tracing::debug!(?config, "starting prompt");

            let stdin = io::stdin();
            let stdout = io::stdout();
            run_prompt(stdin.lock(), stdout.lock(), &config)?;
        }
        Commands::Teleport {
            width,
            height,
            seed,
            seeds,
            json,
        } => {
            let seeds = match seeds {
                Some(list) => parse_seed_csv(&list)?,
                None => vec![parse_seed(&seed)?],
            };
            let points = teleport_batch(Rect::new(width, height), &seeds);
            println!("{}", format_points(&points, json)?);
        }
    }

    Ok(())
}
