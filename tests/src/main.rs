pub mod mock_service;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "integration-tests")]
#[command(about = "Integration testing tool for the IPv4 address toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the end-to-end tests against an in-process mock service
    Run,

    /// Start the mock what-is-my-address service and block
    MockService {
        /// Listen port
        #[arg(long, default_value = "9090")]
        port: u16,

        /// Address the service advertises to every caller
        #[arg(long, default_value = "203.0.113.7")]
        advertised: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run => integration_tests::run_all().await,
        Commands::MockService { port, advertised } => {
            let advertised = address::Address::resolve(&advertised);
            let service = mock_service::MockAddressService::bind(port, advertised).await?;
            println!("Mock service listening on {}", service.url());
            service.run().await
        }
    }
}
