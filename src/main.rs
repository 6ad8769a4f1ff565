//! Curricula · Course Builder Backend
//!
//! - Axum HTTP API for curriculum generation, export, program plans and audits
//! - Optional remote generation through an OpenAI-compatible completion API
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT                  : u16 (default 3000)
//!   LLM_API_KEY           : enables remote generation if present
//!   LLM_BASE_URL          : default "https://api.openai.com/v1"
//!   LLM_MODEL             : default "gpt-4o-mini"
//!   LLM_TIMEOUT_SECS      : upstream request timeout (default 60)
//!   CURRICULA_CONFIG_PATH : path to TOML config (prompts + synthetic delays)
//!   LOG_LEVEL             : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT            : "pretty" (default) or "json"

mod telemetry;
mod util;
mod error;
mod domain;
mod config;
mod normalize;
mod templates;
mod assembler;
mod llm;
mod export;
mod program;
mod audit;
mod state;
mod protocol;
mod logic;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let state = Arc::new(AppState::new());
  let app = build_router(state);

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "curricula_backend", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "curricula_backend", error = %e, "Failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  info!(target: "curricula_backend", "Shutdown signal received");
}
