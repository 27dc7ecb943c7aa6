//! HTTP surface for the cleansing service.
//!
//! Routes mirror the batch pipeline: `/clean_text` cleanses one untrusted
//! string, `/upload_csv` runs the batch pass over an uploaded table, `/test`
//! is a liveness probe. The engine is shared read-only, so handlers run
//! concurrently without locking.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::cleanse::{apply_all, CleanseEngine};
use crate::dataset;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid listen address `{address}`: {source}")]
    InvalidListenAddr {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct CleanTextForm {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct CleanTextResponse {
    cleaned_text: String,
}

#[derive(Debug, Serialize)]
struct CleanedRow {
    #[serde(rename = "Tweet")]
    tweet: String,
    cleaned_tweet: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

pub fn build_router(engine: Arc<CleanseEngine>) -> Router {
    Router::new()
        .route("/clean_text", post(clean_text))
        .route("/upload_csv", post(upload_csv))
        .route("/test", get(liveness))
        .with_state(engine)
}

pub async fn serve(engine: Arc<CleanseEngine>, listen_addr: &str) -> Result<(), ServerError> {
    let addr: SocketAddr =
        listen_addr
            .trim()
            .parse()
            .map_err(|source| ServerError::InvalidListenAddr {
                address: listen_addr.to_string(),
                source,
            })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            address: addr.to_string(),
            source,
        })?;
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!(%local_addr, "bersih server listening");

    axum::serve(listener, build_router(engine))
        .await
        .map_err(ServerError::Serve)
}

async fn clean_text(
    State(engine): State<Arc<CleanseEngine>>,
    Form(form): Form<CleanTextForm>,
) -> Json<CleanTextResponse> {
    Json(CleanTextResponse {
        cleaned_text: engine.cleanse(&form.text),
    })
}

async fn upload_csv(
    State(engine): State<Arc<CleanseEngine>>,
    mut multipart: Multipart,
) -> Result<Json<Vec<CleanedRow>>, (StatusCode, Json<ErrorBody>)> {
    let mut payload: Option<Vec<u8>> = None;
    while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
        let is_file = field.name() == Some("file");
        let bytes = field.bytes().await.map_err(bad_request)?.to_vec();
        if is_file {
            payload = Some(bytes);
            break;
        }
        // Fall back to the first field when none is named `file`
        payload.get_or_insert(bytes);
    }
    let Some(payload) = payload else {
        return Err(bad_request("missing `file` field"));
    };

    // Uploads get the same lossy decode as the bundled dataset
    let decoded = String::from_utf8_lossy(&payload).into_owned();
    let records = dataset::load_records(&decoded).map_err(bad_request)?;
    let cleaned = apply_all(records, &engine);

    let rows = cleaned
        .into_iter()
        .map(|record| CleanedRow {
            cleaned_tweet: record.cleaned.unwrap_or_default(),
            tweet: record.original,
        })
        .collect();
    Ok(Json(rows))
}

async fn liveness() -> &'static str {
    "Server is running!"
}

fn bad_request<E: std::fmt::Display>(error: E) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
}
