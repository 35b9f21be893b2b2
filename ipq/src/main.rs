mod cli;
mod config;
mod telemetry;

use address::Address;
use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::IpqConfig;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    let mut cfg = IpqConfig::load(&args.config)?;
    if let Some(level) = args.log_level {
        cfg.log_level = level;
    }
    if let Some(dir) = args.log_dir {
        cfg.log_dir = Some(dir);
    }
    let _guard = telemetry::init_tracing(cfg.log_dir.as_deref(), "ipq.log", &cfg.log_level);

    let result = match args.command {
        Commands::Local => lookup::local_address().await,
        Commands::Public {
            timeout_secs,
            service,
        } => {
            let service = service.unwrap_or_else(|| cfg.service_url.clone());
            let secs = timeout_secs.unwrap_or(cfg.timeout_secs);
            let deadline = (secs > 0).then(|| Duration::from_secs(secs));
            lookup::public_address_from(&service, deadline).await
        }
        Commands::Resolve { host } => lookup::host_address(&host).await,
        Commands::Show { addr } => {
            // Address::resolve may block on the system resolver.
            let addr = tokio::task::spawn_blocking(move || Address::resolve(&addr)).await?;
            let [a, b, c, d] = addr.octets();
            println!("address : {}", addr);
            println!("bits    : 0x{:08X} ({})", addr.to_bits(), addr.to_bits());
            println!("octets  : [{}, {}, {}, {}]", a, b, c, d);
            return Ok(exit_for(addr));
        }
    };

    println!("{}", result);
    Ok(exit_for(result))
}

/// The sentinel is the only failure signal the core contract exposes, so
/// it drives the exit status.
fn exit_for(addr: Address) -> ExitCode {
    if addr == Address::NONE {
        debug!("Query degraded to the sentinel");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
