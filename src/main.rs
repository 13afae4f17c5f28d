use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;

use translation_admin::config::Config;
use translation_admin::console::{self, parse_command, ConsoleNotifier, LineInput, Reply};
use translation_admin::navigation::HeaderMenu;
use translation_admin::{HttpTranslationGateway, TranslationListController};

/// Browse, search and edit translation records on the backend.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Backend collection URL (overrides TRANSLATIONS_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Per-request timeout in seconds (overrides REQUEST_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they do not interleave with the view
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_admin=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(url) = args.api_url {
        config.api_url = url;
    }
    if let Some(secs) = args.timeout_secs {
        config.request_timeout_secs = secs;
    }
    config.validate()?;

    info!("Using backend at {}", config.api_url);

    let input = Arc::new(LineInput::new(BufReader::new(tokio::io::stdin())));
    let gateway = Arc::new(HttpTranslationGateway::new(&config)?);
    let notifier = Arc::new(ConsoleNotifier::new(input.clone()));
    let mut controller = TranslationListController::new(gateway, notifier);
    let mut menu = HeaderMenu::default();

    controller.activate().await;
    print!("{}", console::render(&controller));
    println!("Type 'help' for commands.");

    while let Some(line) = input.next_line().await {
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match console::execute(&mut controller, &mut menu, command).await {
            Reply::Quit => break,
            Reply::Output(text) => print!("{}", text),
        }
    }

    info!("Bye");
    Ok(())
}
