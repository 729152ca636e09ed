//! BookSwap terminal client
//!
//! Interactive front end: reads commands from stdin, applies backend results as they
//! arrive and re-renders the current screen after each.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use bookswap_terminal::debug::{self, LogConfig};
use bookswap_terminal::repl::{self, Command, Flow};
use bookswap_terminal::{ui, ApiClient, App, ClientConfig};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Flags override the `BOOKSWAP_*` environment, which is read only by
/// `ClientConfig::from_env` and `LogConfig::from_env`.
#[derive(Parser)]
#[command(name = "bookswap")]
#[command(about = "Terminal client for the BookSwap exchange", long_about = None)]
struct Cli {
    /// Backend API root [default: $BOOKSWAP_API_URL]
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds [default: $BOOKSWAP_TIMEOUT_SECS]
    #[arg(long)]
    timeout: Option<u64>,

    /// Directory for the rotated log file [default: $BOOKSWAP_LOG_DIR]
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn log_config(&self, base: LogConfig) -> LogConfig {
        match &self.log_dir {
            Some(dir) => base.with_log_dir(dir),
            None => base,
        }
    }

    fn client_config(&self, mut base: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.api_url {
            base = base.with_api_url(url);
        }
        if let Some(secs) = self.timeout {
            base = base.with_timeout_secs(secs);
        }
        base
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_config = cli.log_config(LogConfig::from_env());
    let _log_guard = debug::init(&log_config);

    let config = cli.client_config(ClientConfig::from_env());
    tracing::info!(api_url = %config.api_url, timeout_secs = config.timeout_secs, "Starting client");

    let api = Arc::new(ApiClient::new(config)?);
    let mut app = App::new(api);
    let events = app.event_rx.clone();
    app.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    redraw(&app, None);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    redraw(&app, None);
                    continue;
                }
                let outcome = line
                    .parse::<Command>()
                    .and_then(|command| repl::execute(&mut app, command));
                match outcome {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::ShowHelp) => {
                        println!("{}", ui::help_text(app.current_screen()));
                        prompt();
                    }
                    Ok(Flow::Continue) => redraw(&app, None),
                    Err(e) => redraw(&app, Some(e.user_message())),
                }
            }
            event = events.recv() => {
                let Ok(event) = event else { break };
                app.handle_event(event);
                app.on_tick();
                redraw(&app, None);
            }
        }
    }

    tracing::info!("Client exiting");
    Ok(())
}

fn redraw(app: &App, error: Option<String>) {
    println!();
    print!("{}", ui::render(app));
    if let Some(error) = error {
        println!("! {error}");
    }
    prompt();
}

fn prompt() {
    print!("bookswap> ");
    // a failed flush only delays the prompt
    let _ = std::io::stdout().flush();
}
