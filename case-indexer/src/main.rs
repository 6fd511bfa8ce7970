use std::env;
use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use case_indexer::config::{CREDENTIAL_ENV_VAR, CREDENTIAL_PLACEHOLDER};
use case_indexer::{reporter, Dependencies, IndexingError, RunConfig};
use case_indexer_shared::RunSummary;

#[derive(Parser)]
#[command(name = "case-indexer")]
#[command(about = "Bulk-loads legal case records into OpenSearch through an embedding pipeline", long_about = None)]
struct Cli {
    /// Path to the JSON array of case records
    #[arg(long)]
    file: PathBuf,

    /// Search engine base URL
    #[arg(long, default_value = "http://localhost:9200")]
    engine_url: String,

    /// Target index name
    #[arg(long, default_value = "legal_cases")]
    index_name: String,

    /// Ingestion pipeline name
    #[arg(long, default_value = "legal_cases_pipeline")]
    pipeline_name: String,

    /// Embedding provider identifier
    #[arg(long, default_value = "openai")]
    provider: String,

    /// Records per bulk request (0 uploads everything in one chunk)
    #[arg(long, default_value = "100")]
    chunk_size: usize,

    /// Maximum characters kept in full_case_text
    #[arg(long, default_value = "2000")]
    max_case_text_chars: usize,

    /// Maximum characters kept in case_identifier
    #[arg(long, default_value = "1000")]
    max_identifier_chars: usize,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        // The credential comes from the environment, never argv. An unset
        // variable resolves to the placeholder, which validation rejects.
        let credential = env::var(CREDENTIAL_ENV_VAR)
            .unwrap_or_else(|_| CREDENTIAL_PLACEHOLDER.to_string());

        RunConfig {
            file_path: self.file,
            engine_url: self.engine_url,
            index_name: self.index_name,
            pipeline_name: self.pipeline_name,
            provider: self.provider,
            credential,
            chunk_size: match self.chunk_size {
                0 => None,
                size => Some(size),
            },
            max_case_text_chars: self.max_case_text_chars,
            max_identifier_chars: self.max_identifier_chars,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.into_config();

    info!(
        file = %config.file_path.display(),
        index = %config.index_name,
        pipeline = %config.pipeline_name,
        "Starting bulk load"
    );

    match run(&config).await {
        Ok(summary) => {
            reporter::print_summary(&summary);
            if !summary.is_success() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("\n❌ Error: {}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("  Caused by: {}", err);
                source = err.source();
            }

            std::process::exit(1);
        }
    }
}

async fn run(config: &RunConfig) -> Result<RunSummary, IndexingError> {
    let dependencies = Dependencies::new(config).await?;
    let summary = dependencies.orchestrator.run().await?;
    Ok(summary)
}
