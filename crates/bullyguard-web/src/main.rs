use bullyguard_classifiers::{artifacts, AttemptOutcome, BullyingClassifier};
use bullyguard_web::cli::Cli;
use bullyguard_web::server::run_server;
use bullyguard_web::state::AppState;
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stopwords = artifacts::load_stopwords(cli.resolve(&cli.stopwords)).unwrap_or_default();
    if !stopwords.is_empty() {
        tracing::info!("Loaded {} stopwords", stopwords.len());
    }

    let (vectorizer, attempts) = artifacts::load_vectorizer(&cli.artifact_dir, &stopwords);
    for attempt in &attempts {
        match &attempt.outcome {
            AttemptOutcome::Selected => {
                tracing::info!("Using vectorizer artifact {}", attempt.path.display())
            }
            AttemptOutcome::NotFound => {
                tracing::debug!("Vectorizer candidate {} not found", attempt.path.display())
            }
            AttemptOutcome::ParseError(e) => tracing::warn!(
                "Vectorizer candidate {} failed to load: {}",
                attempt.path.display(),
                e
            ),
            AttemptOutcome::UnexpectedShape => tracing::warn!(
                "Vectorizer candidate {} has an unexpected shape",
                attempt.path.display()
            ),
        }
    }

    let model = artifacts::load_model(&cli.resolve(&cli.model));

    let state = AppState::new(BullyingClassifier::new(vectorizer, model), attempts);
    let health = state.health();

    let addr: SocketAddr = format!("{}:{}", cli.address, cli.port).parse()?;

    println!();
    println!("  BullyGuard — cyberbullying text classifier");
    println!("  Model:      {:?}", health.model);
    println!("  Vectorizer: {:?}", health.vectorizer);
    println!();
    println!("  Open http://{} in your browser", addr);
    println!();

    run_server(state, addr).await
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "bullyguard_web=debug,bullyguard_classifiers=debug,tower_http=debug"
    } else {
        "bullyguard_web=info,bullyguard_classifiers=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
