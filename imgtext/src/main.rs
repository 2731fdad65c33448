use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgtext::config::{Config, LogFormat};
use imgtext::handler::RequestHandler;
use imgtext::ocr::TextractDetector;

#[derive(Parser)]
#[command(name = "imgtext")]
#[command(about = "Extract text lines from an S3-hosted image with Textract")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run inside the AWS Lambda runtime (default)
    Lambda,
    /// Serve the function over plain HTTP for local development
    Serve {
        /// Bind host (overrides IMGTEXT_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides IMGTEXT_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "imgtext=info,tower_http=debug".into());

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let mut config = Config::from_env();
    let command = args.command.unwrap_or(Command::Lambda);

    let default_format = match command {
        Command::Lambda => LogFormat::Json,
        Command::Serve { .. } => LogFormat::Text,
    };
    init_tracing(config.logging.format.unwrap_or(default_format));

    tracing::info!("Initializing Textract client...");
    let detector = TextractDetector::from_config(&config.textract).await?;
    let handler = RequestHandler::with_placeholder(Arc::new(detector), &config.address.placeholder);

    match command {
        Command::Lambda => {
            tracing::info!("Starting Lambda runtime");
            imgtext::lambda::run(handler)
                .await
                .map_err(|e| anyhow::anyhow!("Lambda runtime error: {e}"))?;
        }
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            imgtext::api::serve(&config.server, handler).await?;
        }
    }

    Ok(())
}
