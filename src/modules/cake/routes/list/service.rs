use super::types::response;
use crate::{modules::cake::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_all(&ctx.db_conn.pool)
        .await
        .map(response::Success::Cakes)
        .map_err(|_| response::Error::FailedToFetchCakes)
}
