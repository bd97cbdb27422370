use anyhow::{Context, Result};
use bishopicon::server::{IdenticonServer, ServerConfig};
use bishopicon::{DirectionSequence, Identicon, IdenticonConfig};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bishopicon", version, about = "Drunken-bishop identicons as SVG")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one identicon
    Render {
        slug: String,
        #[arg(short, long, default_value_t = 7)]
        board_size: u32,
        #[arg(short, long, default_value_t = 3)]
        iterations: u32,
        #[arg(short, long, default_value_t = 300)]
        size: u32,
        /// Emit base64 instead of raw markup
        #[arg(long)]
        base64: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the direction sequence a slug walks
    Directions { slug: String },
    /// Run the HTTP API
    Serve {
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        bind: Option<String>,
        #[arg(short, long)]
        workers: Option<usize>,
    },
}

fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .init();

    match cli.command {
        Command::Render {
            slug,
            board_size,
            iterations,
            size,
            base64,
            output,
        } => {
            let config = IdenticonConfig {
                board_size,
                iterations,
                size,
            };
            let icon = Identicon::new(&slug, &config).context("failed to render identicon")?;
            let text = if base64 {
                icon.image().as_base64()
            } else {
                icon.image().as_markup()
            };
            match output {
                Some(path) => std::fs::write(&path, text)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{}", text),
            }
        }
        Command::Directions { slug } => {
            println!("{}", DirectionSequence::from_slug(&slug));
        }
        Command::Serve {
            config,
            bind,
            workers,
        } => {
            let mut server_config = match config {
                Some(path) => ServerConfig::from_file(&path)?,
                None => ServerConfig::default(),
            };
            if let Some(bind) = bind {
                server_config.bind = bind;
            }
            if let Some(workers) = workers {
                server_config.workers = workers;
            }
            let server = IdenticonServer::bind(server_config).context("failed to start server")?;
            server.run()?;
        }
    }

    Ok(())
}
