//! CLI argument definitions using clap
//!
//! - `movies-api [--port N] [--seed PATH] ...` serves the API
//! - `movies-api check <PATH>` validates a seed file and exits

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::http_server::HttpServerConfig;
use crate::observability::Severity;

/// movies-api - in-memory movie catalogue over HTTP
#[derive(Parser, Debug)]
#[command(name = "movies-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a seed dataset and exit
    Check {
        /// Path to a JSON array of movie records
        path: PathBuf,
    },
}

/// Options for serving the API
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Origin allowed to read responses cross-origin (repeatable)
    #[arg(long = "allow-origin", value_name = "ORIGIN")]
    pub allow_origins: Vec<String>,

    /// Seed dataset to load instead of the bundled one
    #[arg(long, env = "MOVIES_SEED", value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Minimum log severity (debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: Severity,
}

impl ServeArgs {
    /// Server configuration described by these options
    pub fn server_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            ..HttpServerConfig::default()
        }
        .with_cors_origins(self.allow_origins.clone())
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "movies-api",
            "--port",
            "8081",
            "--allow-origin",
            "https://a.example",
            "--allow-origin",
            "https://b.example",
        ])
        .unwrap();
        assert!(cli.command.is_none());

        let config = cli.serve.server_config();
        assert_eq!(config.port, 8081);
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_check_subcommand() {
        let cli = Cli::try_parse_from(["movies-api", "check", "seed.json"]).unwrap();
        match cli.command {
            Some(Command::Check { path }) => assert_eq!(path, PathBuf::from("seed.json")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_level_parsing() {
        let cli = Cli::try_parse_from(["movies-api", "--log-level", "warn"]).unwrap();
        assert_eq!(cli.serve.log_level, Severity::Warn);
        assert!(Cli::try_parse_from(["movies-api", "--log-level", "shout"]).is_err());
    }

    // Environment is process-wide, so every env-driven case lives in this one test
    #[test]
    fn test_serve_options_from_environment() {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "4000");
        std::env::set_var("LOG_LEVEL", "error");

        let from_env = Cli::try_parse_from(["movies-api"]);
        let overridden = Cli::try_parse_from(["movies-api", "--host", "::1", "--port", "4001"]);

        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("LOG_LEVEL");

        let cli = from_env.unwrap();
        assert_eq!(cli.serve.host, "127.0.0.1");
        assert_eq!(cli.serve.port, 4000);
        assert_eq!(cli.serve.log_level, Severity::Error);
        assert_eq!(cli.serve.server_config().socket_addr(), "127.0.0.1:4000");

        let cli = overridden.unwrap();
        assert_eq!(cli.serve.host, "::1");
        assert_eq!(cli.serve.port, 4001);
    }
}
