pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Query {
        // A missing id behaves like an empty one: the lookup misses.
        #[serde(default)]
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::cake::repository::Cake;

    pub enum Success {
        Cake(Cake),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Cake(cake) => (StatusCode::OK, Json(json!(cake))).into_response(),
            }
        }
    }

    pub enum Error {
        CakeNotFound,
        FailedToFetchCake,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CakeNotFound => StatusCode::NO_CONTENT.into_response(),
                Self::FailedToFetchCake => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch cake" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
