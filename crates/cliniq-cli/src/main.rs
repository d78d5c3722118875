use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use cliniq_cli::app::App;
use cliniq_cli::config::{self, CliniqConfig};
use cliniq_store::index::IndexStore;
use cliniq_store::memory::MemoryStore;

#[derive(Parser)]
#[command(name = "cliniq", version, about = "Ask questions about clinical notes")]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true, env = "CLINIQ_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer a single message.
    Ask {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Print the reply as a JSON image/text object.
        #[arg(long)]
        json: bool,
    },
    /// Answer one message per stdin line until EOF.
    Repl {
        #[arg(long)]
        json: bool,
    },
    /// Build a search index from a JSON document file.
    Import {
        documents: PathBuf,
        index_dir: PathBuf,
    },
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Replies go to stdout; logs stay on stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Command::Ask { message, json } => {
            let config = config::load_config(cli.config.as_deref())?;
            let app = App::from_config(&config)?;
            let router = app.router();
            print_reply(&mut std::io::stdout(), &router, &message.join(" "), json)?;
        }
        Command::Repl { json } => {
            let config = config::load_config(cli.config.as_deref())?;
            let app = App::from_config(&config)?;
            let router = app.router();
            let mut out = std::io::stdout();
            for line in std::io::stdin().lock().lines() {
                let line = line?;
                let message = line.trim();
                if message.is_empty() {
                    continue;
                }
                print_reply(&mut out, &router, message, json)?;
            }
        }
        Command::Import {
            documents,
            index_dir,
        } => {
            let store = MemoryStore::load(&documents)?;
            std::fs::create_dir_all(&index_dir)?;
            IndexStore::create(&index_dir, store.documents())?;
            tracing::info!(
                documents = store.len(),
                index = %index_dir.display(),
                "index built"
            );
        }
        Command::Init { force } => {
            let path = match cli.config {
                Some(path) => path,
                None => config::default_config_path()?,
            };
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
            config::save_config(&CliniqConfig::default(), &path)?;
        }
    }

    Ok(())
}

fn print_reply(
    out: &mut impl Write,
    router: &cliniq_router::Router<'_>,
    message: &str,
    json: bool,
) -> Result<()> {
    if json {
        let reply = router.respond(message);
        writeln!(out, "{}", serde_json::to_string(&reply)?)?;
    } else {
        writeln!(out, "{}", router.handle(message))?;
    }
    out.flush()?;
    Ok(())
}
