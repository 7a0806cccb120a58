pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        CakeDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CakeDeleted => StatusCode::OK.into_response(),
            }
        }
    }

    pub enum Error {
        JsonDecodingFailed,
        CakeNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::JsonDecodingFailed => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Json decoding failed" })),
                )
                    .into_response(),
                Self::CakeNotFound => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
