//! Terminal dashboard: each input line is a symbol submit, `:q` quits.

use std::io;

use futures_util::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use stock_predictor::app::terminal;
use stock_predictor::app::{DashboardController, DashboardEvent};
use stock_predictor::client::{PredictionSource, PredictorClient};

const QUIT: &str = ":q";

fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .compact()
        .with_env_filter(filter)
        .init();
}

async fn repaint<S: PredictionSource>(controller: &DashboardController<S>) -> io::Result<()> {
    let screen = controller.screen().await;
    let mut out = io::stdout().lock();
    terminal::clear(&mut out)?;
    terminal::paint(&screen, &mut out)
}

#[tokio::main]
async fn main() -> io::Result<()> {
    setup_logger();

    let client = PredictorClient::new().map_err(io::Error::other)?;
    tracing::info!(base_url = client.base_url(), "Starting dashboard");

    let controller = DashboardController::new(client);
    let events = controller.events();
    tokio::pin!(events);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    repaint(&controller).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim() == QUIT {
                    break;
                }
                controller.submit_symbol(line).await;
            }
            Some(event) = events.next() => {
                if let DashboardEvent::Stale { request } = event {
                    tracing::debug!(%request, "Ignored superseded response");
                    continue;
                }
                repaint(&controller).await?;
            }
        }
    }

    Ok(())
}
