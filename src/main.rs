use crate::config::AppConfig;
use crate::leads::{AirtableClient, LeadCapture};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod booking;
mod config;
mod domain;
mod errors;
mod handlers;
mod leads;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let airtable = match AirtableClient::new(&config.airtable) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to set up lead storage client: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = airtable.check_config() {
        tracing::warn!("Lead submissions will fail: {e}");
    }

    let state = AppState::new(Arc::new(airtable), config.confirm_delay);

    tracing::info!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        match handle(req, &state) {
            Ok(resp) => {
                tracing::debug!(%method, %path, status = resp.status().as_u16(), "request");
                resp
            }
            Err(err) => {
                tracing::warn!(%method, %path, "request failed: {err}");
                error_to_response(err)
            }
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
