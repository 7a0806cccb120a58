use super::types::{request, response};
use crate::{modules::cake::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, query: request::Query) -> response::Response {
    repository::find_by_id(&ctx.db_conn.pool, query.id)
        .await
        .map_err(|_| response::Error::FailedToFetchCake)?
        .ok_or(response::Error::CakeNotFound)
        .map(response::Success::Cake)
}
