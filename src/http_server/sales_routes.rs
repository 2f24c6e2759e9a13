//! Sales HTTP Routes
//!
//! Endpoints for uploading a dataset and querying it.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::dataset::{Dataset, DatasetStore};
use crate::executor::{QueryExecutor, RawQueryParams, SalesResult};
use crate::observability::{Logger, MetricsRegistry};

use super::errors::{ApiError, ApiResult};

/// Message returned on a successful upload
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded and stored in memory successfully.";

// ==================
// Shared State
// ==================

/// State shared across handlers
#[derive(Debug, Default)]
pub struct SalesState {
    pub store: DatasetStore,
    pub metrics: MetricsRegistry,
}

impl SalesState {
    pub fn new() -> Self {
        Self::default()
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub num_rows: usize,
    pub columns: Vec<String>,
}

impl From<&Dataset> for UploadResponse {
    fn from(dataset: &Dataset) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            num_rows: dataset.len(),
            columns: dataset.columns().to_vec(),
        }
    }
}

// ==================
// Router
// ==================

/// Create sales routes
pub fn sales_routes(state: Arc<SalesState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload_csv))
        .route("/sales", get(get_filtered_sales))
        .route("/sales/", get(get_filtered_sales))
        .with_state(state)
}

// ==================
// Route Handlers
// ==================

/// GET /
async fn index() -> &'static str {
    "Welcome"
}

/// POST /upload - Replace the dataset with an uploaded CSV file
async fn upload_csv(
    State(state): State<Arc<SalesState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let (file_name, data) = match read_file_part(&mut multipart).await {
        Ok(part) => part,
        Err(e) => {
            reject_upload(&state, &e);
            return Err(e);
        }
    };

    // Decoding is CPU-bound; keep it off the async workers.
    let load_state = Arc::clone(&state);
    let loaded = tokio::task::spawn_blocking(move || load_state.store.load_csv(&data))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    match loaded {
        Ok(dataset) => {
            state.metrics.record_upload(dataset.len());
            let rows = dataset.len().to_string();
            let columns = dataset.columns().join(",");
            Logger::info(
                "DATASET_LOADED",
                &[
                    ("file", file_name.as_str()),
                    ("rows", rows.as_str()),
                    ("columns", columns.as_str()),
                ],
            );
            Ok(Json(UploadResponse::from(dataset.as_ref())))
        }
        Err(e) => {
            let err = ApiError::from(e);
            reject_upload(&state, &err);
            Err(err)
        }
    }
}

/// Pull the `file` part out of a multipart body
async fn read_file_part(multipart: &mut Multipart) -> ApiResult<(String, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidMultipart(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        // A plain form value named `file` is not a file part.
        let file_name = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };
        if file_name.is_empty() {
            return Err(ApiError::NoFileSelected);
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidMultipart(e.to_string()))?;
        return Ok((file_name, data.to_vec()));
    }

    Err(ApiError::MissingFilePart)
}

fn reject_upload(state: &SalesState, err: &ApiError) {
    state.metrics.increment_uploads_rejected();
    let reason = err.to_string();
    Logger::warn("DATASET_REJECTED", &[("reason", reason.as_str())]);
}

/// GET /sales - Filtered, paginated aggregation over the dataset
async fn get_filtered_sales(
    State(state): State<Arc<SalesState>>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Json<SalesResult>> {
    let params = RawQueryParams::from_map(&query);

    match QueryExecutor::new(&state.store).execute(&params) {
        Ok(result) => {
            state.metrics.increment_queries_executed();
            let matched = result.count_transactions.to_string();
            let page = result.page.to_string();
            let returned = result.len().to_string();
            Logger::trace(
                "QUERY_EXECUTED",
                &[
                    ("count_transactions", matched.as_str()),
                    ("page", page.as_str()),
                    ("returned", returned.as_str()),
                ],
            );
            Ok(Json(result))
        }
        Err(e) => {
            state.metrics.increment_queries_rejected();
            let reason = e.to_string();
            Logger::warn("QUERY_REJECTED", &[("code", e.code()), ("reason", reason.as_str())]);
            Err(ApiError::from(e))
        }
    }
}
