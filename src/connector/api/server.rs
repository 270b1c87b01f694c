use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::Json;
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::info;

use crate::domain::{BirthDate, DomainError, Horoscope};

use super::{ApiError, Container};

pub const HOROSCOPE_PATH: &str = "/api/zodiac-horoscope";
pub const HEALTH_PATH: &str = "/healthz";

#[derive(Serialize)]
struct Health {
    ok: bool,
    service: &'static str,
}

/// Build the HTTP application around a container.
pub fn app(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route(HEALTH_PATH, get(health))
        .route(HOROSCOPE_PATH, post(zodiac_horoscope))
        .with_state(container)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app(container))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}

async fn health() -> Json<Health> {
    Json(Health {
        ok: true,
        service: "zodiac-horoscope",
    })
}

// Body errors answer 500 like every other non-validation failure.
async fn zodiac_horoscope(
    State(container): State<Arc<Container>>,
    body: Bytes,
) -> Result<Json<Horoscope>, ApiError> {
    let birth_date: BirthDate =
        serde_json::from_slice(&body).map_err(|e| DomainError::internal(e.to_string()))?;

    let horoscope = container
        .zodiac_horoscope_use_case()
        .execute(birth_date)
        .await?;

    Ok(Json(horoscope))
}
