//! CLI entrypoint for online-quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use logging::{CLIENT_LOG_PREFIX, LogSink, SERVER_LOG_PREFIX};
use quiz_application::{ApiKeyGuard, NoRequestLogger, RequestLogger, TakeQuizUseCase};
use quiz_domain::QuizId;
use quiz_infrastructure::{
    ConfigLoader, FileConfig, HttpQuizGateway, InMemoryQuizRepository, JsonlRequestLogger,
    load_catalog,
};
use quiz_presentation::{
    ApiState, Cli, Command, ConsoleFormatter, OutputFormat, QuizTuiApp, build_router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    match cli.command.clone() {
        Command::Serve { bind } => serve(&cli, config, bind).await,
        Command::List => list(&cli, &config).await,
        Command::Take { id } => take(&cli, &config, QuizId::new(id)).await,
        Command::ShowConfig => show_config(&cli, &config),
    }
}

async fn serve(cli: &Cli, mut config: FileConfig, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    config.validate_server()?;

    // The server logs at info unless asked for more.
    let _guard = logging::init(
        cli.verbose.max(1),
        LogSink::TerminalAndFile {
            dir: &config.logging.directory,
            prefix: SERVER_LOG_PREFIX,
        },
    )?;
    info!("Starting online-quiz API server");

    // === Dependency Injection ===
    let quizzes = load_catalog(config.catalog.path.as_deref())?;
    let repository = Arc::new(InMemoryQuizRepository::from_quizzes(quizzes)?);
    info!(quizzes = repository.len(), "Catalog loaded");

    let request_logger: Arc<dyn RequestLogger> = if config.logging.request_log {
        match JsonlRequestLogger::in_dir(&config.logging.directory) {
            Some(logger) => {
                info!("Request log: {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoRequestLogger),
        }
    } else {
        Arc::new(NoRequestLogger)
    };

    if config.server.api_key.is_empty() {
        warn!("server.api_key is empty: every /api request will be rejected with 401");
    }
    if config.server.expose_error_details {
        warn!("server.expose_error_details is on: internal errors are sent to clients");
    }

    let state = ApiState::new(
        repository,
        ApiKeyGuard::new(config.server.api_key.clone()),
        request_logger,
    )
    .with_error_details(config.server.expose_error_details);
    let router = build_router(state);

    let listener = TcpListener::bind(config.server.bind.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown requested");
                signal.cancel();
            }
            Err(e) => warn!("Cannot listen for Ctrl+C: {}", e),
        }
    });

    quiz_presentation::serve(listener, router, shutdown).await?;
    Ok(())
}

fn gateway(config: &FileConfig) -> Result<Arc<HttpQuizGateway>> {
    let gateway = HttpQuizGateway::new(
        &config.client.base_url,
        config.client.api_key.clone(),
        config.client.timeout(),
    )
    .context("Failed to build HTTP client")?;
    Ok(Arc::new(gateway))
}

async fn list(cli: &Cli, config: &FileConfig) -> Result<()> {
    let _guard = logging::init(cli.verbose, LogSink::Terminal)?;
    config.validate_client()?;

    let use_case = TakeQuizUseCase::new(gateway(config)?, config.session.to_session_rules());
    let quizzes = use_case.list().await?;

    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format_quiz_list(&quizzes),
        OutputFormat::Json => ConsoleFormatter::format_json(&quizzes),
    };
    println!("{}", output);
    Ok(())
}

async fn take(cli: &Cli, config: &FileConfig, id: QuizId) -> Result<()> {
    // Log to file only: the TUI owns the terminal.
    let _guard = logging::init(
        cli.verbose,
        LogSink::FileOnly {
            dir: &config.logging.directory,
            prefix: CLIENT_LOG_PREFIX,
        },
    )?;
    config.validate_client()?;
    config.validate_session()?;
    info!(quiz_id = %id, "Starting quiz client");

    let mut app = QuizTuiApp::new(id, gateway(config)?, config.session.to_session_rules());
    match app.run().await? {
        Some(report) => {
            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_report(&report),
                OutputFormat::Json => ConsoleFormatter::format_json(&report),
            };
            println!("{}", output);
        }
        None => println!("Quiz {} was not completed.", id),
    }
    Ok(())
}

fn show_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    if cli.no_config {
        println!("Configuration files disabled (--no-config); using built-in defaults.");
    } else {
        ConfigLoader::print_config_sources(cli.config.as_deref());
    }
    println!();
    println!("Effective configuration (keys masked):");
    println!("{}", config.to_redacted_toml()?);

    if let Err(e) = config.validate() {
        println!("Warning: {}", e);
    }
    Ok(())
}
