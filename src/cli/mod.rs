use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::serve;

#[derive(Parser)]
#[command(name = "firescope")]
#[command(about = "Wildfire exploration dashboard backend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Path to the wildfire CSV dataset
        #[arg(short, long, env = "DATASET_PATH")]
        dataset: Option<PathBuf>,
        /// Address to bind the HTTP server to
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { dataset, bind } => {
                serve(dataset.as_deref(), bind.as_deref()).await?;
            }
        }
        Ok(())
    }
}
