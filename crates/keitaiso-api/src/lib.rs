//! keitaiso-api crate
//!
//! Web server providing morphological analysis functionality as HTTP API.
//!
//! ## Endpoints
//! - `GET /` - Service metadata
//! - `GET /health` - Health Check
//! - `POST /tokenize` - Single text analysis
//! - `POST /process` - Batch analysis of sentences
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/tokenize \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "東京タワーは東京の観光名所です"}'
//!
//! curl -X POST http://127.0.0.1:8000/process \
//!   -H "Content-Type: application/json" \
//!   -d '{"sentences": [{"id": 1, "raw": "今日は"}, {"id": 2, "raw": "良い天気です"}]}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{ProcessRequest, ProcessResponse, TokenizeRequest, TokenizeResponse};
pub use service::{KeitaisoApiService, KeitaisoApiServiceFull};
