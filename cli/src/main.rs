//! # seagro
//!
//! Command-line front end for the SeaGro landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Write dist/index.html with inline CSS
//! seagro render
//!
//! # Link an external stylesheet and write it alongside the page
//! seagro render --out public --stylesheet styles.css
//!
//! # Preview on http://127.0.0.1:8080/
//! seagro serve
//!
//! # Dump the nav / feature / footer content
//! seagro content --pretty
//! ```

mod args;
mod config;
mod error;
mod render;
mod serve;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use args::{Args, Command, ContentArgs};
use config::SeagroConfig;
use error::CliError;
use seagro_site::content::site_content;

/// On Unix systems, writing to a closed pipe sends SIGPIPE which terminates
/// the process. We ignore it to allow the write to fail with EPIPE instead.
#[cfg(unix)]
fn ignore_sigpipe() {
    // SAFETY: installs the default-ignore disposition before any other thread
    // is spawned; no handler code runs.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_IGN);
    }
}

#[cfg(not(unix))]
fn ignore_sigpipe() {
    // No-op on non-Unix platforms
}

fn init_logging(log_level: LevelFilter) {
    // Logs go to stderr; stdout is reserved for `content` output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(log_level.into()));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn load_config(args: &Args) -> Result<SeagroConfig> {
    match &args.config {
        Some(path) => SeagroConfig::load_from_path(path)
            .with_context(|| format!("loading --config {}", path.display())),
        None => Ok(SeagroConfig::load(Path::new("."))),
    }
}

fn print_content(args: &ContentArgs) -> Result<(), CliError> {
    let content = site_content();
    let mut stdout = io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut stdout, &content)?;
    } else {
        serde_json::to_writer(&mut stdout, &content)?;
    }
    writeln!(stdout).map_err(|source| CliError::Io {
        path: "<stdout>".into(),
        source,
    })
}

async fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level);
    debug!("seagro v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args)?;

    match args.command {
        Command::Render(render) => {
            let out = render.out.unwrap_or_else(|| config.output.dir.clone());
            let options = config.page_options(render.stylesheet);
            let written = render::write_site(&out, &options)
                .with_context(|| format!("rendering into {}", out.display()))?;
            info!("Rendered {} file(s) into {}", written.len(), out.display());
        }
        Command::Serve(serve) => {
            let addr = serve.addr.unwrap_or(config.serve.addr);
            let options = config.page_options(None);
            serve::serve(addr, &options).await?;
        }
        Command::Content(content) => {
            if let Err(err) = print_content(&content) {
                // Reader went away (`seagro content | head`), not our failure
                if !err.is_broken_pipe() {
                    return Err(err.into());
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ignore SIGPIPE - allows broken pipe to be handled as error instead of signal
    ignore_sigpipe();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[seagro] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
