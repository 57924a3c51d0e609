//! bpfd - host-resident eBPF tracing daemon and rule engine control.

mod client;
mod table;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bpfd_daemon::config::{DEFAULT_GRPC_ADDR, DEFAULT_RULES_DIR};
use clap::{Parser, Subcommand};
use table::{Column, Table};

use crate::client::DaemonClient;

#[derive(Parser)]
#[command(name = "bpfd", version, about = "host-resident tracing daemon and rule engine")]
struct Cli {
    /// Verbose logging
    #[arg(short = 'd', long, global = true)]
    debug: bool,

    /// Control-plane Unix socket path
    #[arg(long, global = true, default_value = DEFAULT_GRPC_ADDR)]
    grpc_addr: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the daemon (foreground)
    Daemon {
        /// Directory of one-rule-per-file rule files
        #[arg(long, default_value = DEFAULT_RULES_DIR)]
        rules_dir: PathBuf,
    },
    /// Create one or more rules from rule files
    Create {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Remove one or more rules by name
    Rm {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// List currently registered rules
    Ls,
    /// Stream matched events as they occur
    Trace,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    bpfd_daemon::setup_logging(cli.debug);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Daemon { rules_dir } => {
            let config = bpfd_daemon::Config {
                rules_dir,
                grpc_addr: cli.grpc_addr,
                debug: cli.debug,
                ..Default::default()
            };
            bpfd_daemon::run(config).await?;
        }
        Commands::Create { files } => create(&cli.grpc_addr, files).await?,
        Commands::Rm { names } => rm(&cli.grpc_addr, names).await?,
        Commands::Ls => ls(&cli.grpc_addr).await?,
        Commands::Trace => trace(&cli.grpc_addr).await?,
    }
    Ok(())
}

async fn create(grpc_addr: &std::path::Path, files: Vec<PathBuf>) -> Result<()> {
    let mut client = DaemonClient::connect(grpc_addr).await?;
    for file in files {
        let rule = bpfd_rules::parse_rule_file(&file)
            .with_context(|| format!("parsing rule file {}", file.display()))?;
        let name = rule.name.clone();
        client
            .create_rule(rule)
            .await
            .with_context(|| format!("creating rule from {}", file.display()))?;
        println!("created rule {name}");
    }
    Ok(())
}

async fn rm(grpc_addr: &std::path::Path, names: Vec<String>) -> Result<()> {
    let mut client = DaemonClient::connect(grpc_addr).await?;
    for name in names {
        client
            .remove_rule(name.clone())
            .await
            .with_context(|| format!("removing rule {name}"))?;
        println!("removed rule {name}");
    }
    Ok(())
}

async fn ls(grpc_addr: &std::path::Path) -> Result<()> {
    let mut client = DaemonClient::connect(grpc_addr).await?;
    let rules = client.list_rules().await?;

    let mut table = Table::new(vec![Column { name: "NAME" }, Column { name: "TRACER" }]);
    for rule in rules {
        table.row(vec![rule.name, rule.tracer]);
    }
    table.render(&mut std::io::stdout());
    Ok(())
}

async fn trace(grpc_addr: &std::path::Path) -> Result<()> {
    let mut client = DaemonClient::connect(grpc_addr).await?;
    let mut stream = client.live_trace().await?;
    while let Some(event) = stream.message().await.context("live-trace stream error")? {
        println!(
            "{:<16} pid={:<8} container_runtime={:<10} container_id={:<16} command={}",
            event.tracer, event.pid, event.container_runtime, event.container_id, event.command
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
