use super::service::service;
use crate::types::Context;
use axum::{extract::State, response::IntoResponse};
use bytes::Bytes;
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, body: Bytes) -> impl IntoResponse {
    service(ctx, body).await
}
