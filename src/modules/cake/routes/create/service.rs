use super::types::{request, response};
use crate::{modules::cake::repository, types::Context};
use bytes::Bytes;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, body: Bytes) -> response::Response {
    let payload: request::Payload =
        serde_json::from_slice(&body).map_err(|_| response::Error::JsonDecodingFailed)?;

    repository::create(&ctx.db_conn.pool, payload)
        .await
        .map(response::Success::CakeCreated)
        .map_err(|_| response::Error::CakeCreationFailed)
}
