pub mod api;
pub mod config;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::AnalyzerConfig;
use crate::services::analysis_service::AnalysisService;
use crate::services::extractor::{ImageExtractor, PdfExtractor};
use crate::services::ocr::OcrEngine;
use crate::services::storage::StorageService;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::health::root,
        api::handlers::health::health_check,
        api::handlers::analyze::analyze,
    ),
    components(
        schemas(
            api::handlers::health::RootResponse,
            api::handlers::health::HealthResponse,
            api::handlers::analyze::AnalyzeRequest,
            api::handlers::analyze::AnalyzeResponse,
        )
    ),
    tags(
        (name = "system", description = "Service status endpoints"),
        (name = "analysis", description = "Report text extraction")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn StorageService>,
    pub ocr: Arc<dyn OcrEngine>,
    pub analysis: Arc<AnalysisService>,
    pub config: AnalyzerConfig,
}

impl AppState {
    /// Wire the default extractors (lopdf for PDFs, `ocr` for everything else)
    pub fn new(
        storage: Arc<dyn StorageService>,
        ocr: Arc<dyn OcrEngine>,
        config: AnalyzerConfig,
    ) -> Self {
        let analysis = Arc::new(AnalysisService::new(
            storage.clone(),
            Arc::new(PdfExtractor::new()),
            Arc::new(ImageExtractor::new(ocr.clone())),
            config.clone(),
        ));

        Self {
            storage,
            ocr,
            analysis,
            config,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(api::handlers::health::root))
        .route("/health", get(api::handlers::health::health_check))
        .route("/analyze", post(api::handlers::analyze::analyze))
        .layer(from_fn(api::middleware::metrics::metrics_middleware))
        .layer(from_fn(api::middleware::request_id::request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum::extract::DefaultBodyLimit::max(
            state.config.max_file_size + 1024 * 1024, // Add 1MB buffer for multipart overhead
        ))
        .with_state(state)
}
