//! capkit CLI — capability registry demo for the Model Context Protocol
//!
//! Commands: demo (default), list, serve, completions

mod demo;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use rmcp::{transport::stdio, ServiceExt};
use tracing::Level;

use capkit_core::CapabilityRegistry;
use capkit_demo::demo_registry;
use capkit_mcp::CapkitService;

#[derive(Parser)]
#[command(name = "capkit")]
#[command(version)]
#[command(about = "Capability registry demo for the Model Context Protocol")]
struct Cli {
    /// Log registration and dispatch detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the scripted demo
    #[command(alias = "d")]
    Demo,
    /// List registered capabilities
    #[command(alias = "ls")]
    List,
    /// Serve the demo tools over MCP stdio
    Serve,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = demo_registry()?;

    match cli.command {
        None | Some(Commands::Demo) => demo::run(&registry)?,
        Some(Commands::List) => list(&registry),
        Some(Commands::Serve) => serve(registry)?,
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "capkit", &mut io::stdout());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn list(registry: &CapabilityRegistry) {
    for capability in registry.iter() {
        let title = capability.title.as_deref().unwrap_or("-");
        println!("{}\t{}\t{}", capability.kind, capability.identifier, title);
    }
}

/// Block on an rmcp stdio server for the lifetime of the transport.
fn serve(registry: CapabilityRegistry) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let service = CapkitService::new(Arc::new(registry))
            .serve(stdio())
            .await?;
        service.waiting().await?;
        Ok(())
    })
}
