use clap::{Args as ClapArgs, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "seagro")]
#[command(about = "Render, preview and export the SeaGro landing page")]
#[command(version)]
pub struct Args {
    /// Log level (off, trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info", global = true, value_name = "LEVEL")]
    pub log_level: LevelFilter,

    /// Config file (default: ./seagro.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write index.html (and a linked stylesheet, if any) to a directory
    Render(RenderArgs),
    /// Serve the page over HTTP for local preview
    Serve(ServeArgs),
    /// Print the static page content as JSON
    Content(ContentArgs),
}

#[derive(ClapArgs, Debug)]
pub struct RenderArgs {
    /// Output directory (default: [output].dir from config, else ./dist)
    #[arg(long, short, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Link this stylesheet instead of inlining the page CSS
    #[arg(long, value_name = "HREF")]
    pub stylesheet: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct ServeArgs {
    /// Listen address (default: [serve].addr from config, else 127.0.0.1:8080)
    #[arg(long, value_name = "ADDR")]
    pub addr: Option<SocketAddr>,
}

#[derive(ClapArgs, Debug)]
pub struct ContentArgs {
    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_render_with_global_flags_after_subcommand() {
        let args = Args::parse_from([
            "seagro",
            "render",
            "--out",
            "public",
            "--log-level",
            "debug",
            "--config",
            "site.toml",
        ]);

        assert_eq!(args.log_level, LevelFilter::DEBUG);
        assert_eq!(args.config, Some(PathBuf::from("site.toml")));
        match args.command {
            Command::Render(render) => {
                assert_eq!(render.out, Some(PathBuf::from("public")));
                assert_eq!(render.stylesheet, None);
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn log_level_defaults_to_info() {
        let args = Args::parse_from(["seagro", "content"]);
        assert_eq!(args.log_level, LevelFilter::INFO);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let parsed = Args::try_parse_from(["seagro", "--log-level", "verbose", "content"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn rejects_bad_listen_address() {
        let parsed = Args::try_parse_from(["seagro", "serve", "--addr", "localhost"]);
        assert!(parsed.is_err());
    }
}
