// src/cli/mod.rs — CLI definition (clap derive)

use clap::Parser;

use crate::infra::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "codescribe",
    about = "Code documentation service backed by a chat-completion model",
    version
)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Address to bind (overrides [server].host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides [server].port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Command-line flags win over file and environment values.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
