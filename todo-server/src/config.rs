use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "info,todo_server=debug";

/// Server configuration, from flags or environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "Serve the todo app and its REST API", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "TODO_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Log filter directives, e.g. `debug` or `todo_server=trace`
    #[arg(long, env = "TODO_LOG")]
    pub log: Option<String>,

    /// Start with a few sample todos
    #[arg(long)]
    pub seed_demo: bool,
}

impl Config {
    pub fn env_filter(&self) -> EnvFilter {
        match &self.log {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        }
    }
}

/// Install the global `tracing` subscriber.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .init();
}
