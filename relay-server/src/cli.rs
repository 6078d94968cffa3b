use clap::{Parser, Subcommand};
use relay_types::RelayConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "claude-relay",
    about = "Claude Relay - Messages API in front of ChatCompletions upstreams",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, env = "RELAY_CONFIG", help = "Path to a JSON config file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the relay server (default if no command specified)")]
    Serve,

    #[command(about = "Print the effective configuration")]
    Config {
        #[arg(long, help = "Include API keys in the output")]
        show_secrets: bool,
    },
}

/// Settings that take precedence over the config file.
#[derive(clap::Args, Debug, Default)]
pub struct ConfigOverrides {
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "RELAY_HOST")]
    pub host: Option<String>,

    #[arg(long, env = "RELAY_DEFAULT_BASE_URL")]
    pub default_base_url: Option<String>,

    #[arg(long, env = "HAIKU_MODEL_NAME")]
    pub haiku_model_name: Option<String>,

    #[arg(long, env = "HAIKU_BASE_URL")]
    pub haiku_base_url: Option<String>,

    #[arg(long, env = "HAIKU_API_KEY", hide_env_values = true)]
    pub haiku_api_key: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut RelayConfig) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = &self.host {
            config.host.clone_from(host);
        }
        if let Some(url) = &self.default_base_url {
            config.default_base_url.clone_from(url);
        }
        if let Some(model) = &self.haiku_model_name {
            config.keyword_route.model_name.clone_from(model);
        }
        if let Some(url) = &self.haiku_base_url {
            config.keyword_route.base_url.clone_from(url);
        }
        if let Some(key) = &self.haiku_api_key {
            config.keyword_route.api_key.clone_from(key);
        }
    }
}
