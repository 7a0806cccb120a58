use crate::{modules::cake, types::Context};
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().merge(cake::get_router())
}
