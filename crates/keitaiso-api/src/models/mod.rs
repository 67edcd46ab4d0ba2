//! モデルモジュール

mod request;
mod response;

pub use request::{ProcessRequest, TokenizeRequest};
pub use response::{HealthResponse, ProcessResponse, ServiceInfoResponse, TokenizeResponse};
