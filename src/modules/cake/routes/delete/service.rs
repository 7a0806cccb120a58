use super::types::{request, response};
use crate::{modules::cake::repository, types::Context};
use bytes::Bytes;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, body: Bytes) -> response::Response {
    let payload: request::Payload =
        serde_json::from_slice(&body).map_err(|_| response::Error::JsonDecodingFailed)?;

    match repository::delete_by_id(&ctx.db_conn.pool, payload.id).await {
        Ok(Some(_)) => Ok(response::Success::CakeDeleted),
        // Nothing deleted and backend failure share one outcome on the wire.
        Ok(None) | Err(_) => Err(response::Error::CakeNotFound),
    }
}
