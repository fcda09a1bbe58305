use std::process;

use clap::{Parser, Subcommand};
use tracing::error;

use blueprint_cli::config::{parse_host, Config};
use blueprint_cli::{init_tracing, render_document, run_server, RenderRequest};
use blueprint_core::DocumentType;

#[derive(Parser)]
#[command(name = "blueprint")]
#[command(about = "Blueprint - product planning documents from a project description")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        #[arg(long, help = "API server port (overrides BLUEPRINT_API_PORT)")]
        port: Option<u16>,
        #[arg(long, help = "Address to bind (overrides BLUEPRINT_API_HOST)")]
        host: Option<String>,
        #[arg(long, help = "Seed the demo project on startup")]
        sample_data: bool,
    },
    /// Render one document to stdout without storing it
    Generate {
        #[arg(long)]
        name: String,
        #[arg(long = "type", help = "Project type, e.g. saas or mobile-app")]
        project_type: String,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, help = "roadmap, mvp, architecture or plan")]
        document: DocumentType,
        #[arg(long, help = "Use the AI generator instead of templates")]
        ai: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = handle_command(cli.command).await {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;

    match command {
        Commands::Serve {
            port,
            host,
            sample_data,
        } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = parse_host(&host)?;
            }
            config.sample_data |= sample_data;
            run_server(config).await
        }
        Commands::Generate {
            name,
            project_type,
            industry,
            description,
            document,
            ai,
        } => {
            let request = RenderRequest {
                name,
                project_type,
                industry,
                description,
                document_type: document,
                use_ai: ai,
            };
            let html = render_document(&request, &config.ai).await?;
            println!("{}", html);
            Ok(())
        }
    }
}
