use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ipq")]
#[command(about = "IPv4 address queries: local interface, public internet, DNS", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "ipq.toml")]
    pub config: String,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, env = "IPQ_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Override log directory for file-based logging
    #[arg(long, env = "IPQ_LOG_DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the address of the interface used to reach the internet
    Local,

    /// Ask a public echo service for the internet-facing address
    Public {
        /// Seconds to wait before giving up (0 = no explicit deadline)
        #[arg(short, long)]
        timeout_secs: Option<u64>,

        /// Override the echo service URL
        #[arg(short, long, env = "IPQ_SERVICE_URL")]
        service: Option<String>,
    },

    /// Resolve a hostname and print its first IPv4 address
    Resolve {
        /// Hostname or dotted-decimal address
        host: String,
    },

    /// Parse an address and print all of its representations
    Show {
        /// Dotted-decimal address, hostname, or "localhost"
        addr: String,
    },
}
