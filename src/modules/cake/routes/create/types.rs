pub mod request {
    use crate::modules::cake::repository;

    pub type Payload = repository::CreateCakePayload;
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::cake::repository::Cake;

    pub enum Success {
        CakeCreated(Cake),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CakeCreated(cake) => {
                    (StatusCode::CREATED, Json(json!(cake))).into_response()
                }
            }
        }
    }

    pub enum Error {
        JsonDecodingFailed,
        CakeCreationFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::JsonDecodingFailed => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Json decoding failed" })),
                )
                    .into_response(),
                Self::CakeCreationFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Cake creation failed" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
