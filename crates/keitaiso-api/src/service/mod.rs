//! Service module

mod keitaiso_api_service;

pub use keitaiso_api_service::{KeitaisoApiService, KeitaisoApiServiceFull};
