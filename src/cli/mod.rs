use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{render_report_file, serve, ReportArgs};

#[derive(Parser)]
#[command(name = "storecast")]
#[command(about = "Weekly sales forecast dashboard with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Path to the serialized model artifact
        #[arg(short, long, env = "MODEL_PATH", default_value = "assets/sales_model.json")]
        model_path: String,
        /// Address to bind the HTTP server to
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Render a forecast report PDF without starting the server
    ///
    /// Runs the same predict/summarize/render pipeline as the web API and
    /// writes the document to disk.
    Report(ReportArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                model_path,
                bind_address,
            } => {
                serve(&model_path, &bind_address).await?;
            }
            Commands::Report(args) => {
                render_report_file(args)?;
            }
        }
        Ok(())
    }
}
