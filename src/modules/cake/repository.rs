use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Cake {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yum_factor: Option<i32>,
    // Bookkeeping column, never part of the wire representation.
    #[serde(skip_serializing)]
    pub created_at: NaiveDateTime,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateCakePayload {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub image_url: Option<String>,
    pub yum_factor: Option<i32>,
}

pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateCakePayload) -> Result<Cake, Error> {
    sqlx::query_as::<_, Cake>(
        "
        INSERT INTO cakes
        (id, name, comment, image_url, yum_factor)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, comment, image_url, yum_factor, created_at
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.comment)
    .bind(payload.image_url)
    .bind(payload.yum_factor)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a cake: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Cake>, Error> {
    sqlx::query_as::<_, Cake>(
        "SELECT id, name, comment, image_url, yum_factor, created_at FROM cakes WHERE id = $1",
    )
    .bind(id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching cake with id {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn find_all<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Cake>, Error> {
    sqlx::query_as::<_, Cake>(
        "SELECT id, name, comment, image_url, yum_factor, created_at FROM cakes",
    )
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch cakes: {}", err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Cake>, Error> {
    sqlx::query_as::<_, Cake>(
        "DELETE FROM cakes WHERE id = $1 RETURNING id, name, comment, image_url, yum_factor, created_at",
    )
    .bind(id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to delete a cake by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn epoch() -> NaiveDateTime {
        chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc()
    }

    #[test]
    fn cake_serializes_with_camel_case_keys() {
        let cake = Cake {
            id: "01J0000000000000000000000".to_string(),
            name: Some("Victoria Sponge".to_string()),
            comment: None,
            image_url: Some("https://example.com/sponge.png".to_string()),
            yum_factor: Some(9),
            created_at: epoch(),
        };

        assert_eq!(
            serde_json::to_value(&cake).unwrap(),
            json!({
                "id": "01J0000000000000000000000",
                "name": "Victoria Sponge",
                "imageUrl": "https://example.com/sponge.png",
                "yumFactor": 9
            })
        );
    }

    #[test]
    fn cake_serialization_omits_absent_fields() {
        let cake = Cake {
            id: "01J0000000000000000000001".to_string(),
            name: None,
            comment: None,
            image_url: None,
            yum_factor: None,
            created_at: epoch(),
        };

        assert_eq!(
            serde_json::to_value(&cake).unwrap(),
            json!({ "id": "01J0000000000000000000001" })
        );
    }

    #[test]
    fn create_payload_accepts_partial_bodies() {
        let payload: CreateCakePayload =
            serde_json::from_str(r#"{"name":"Victoria Sponge","yumFactor":9}"#).unwrap();

        assert_eq!(payload.name.as_deref(), Some("Victoria Sponge"));
        assert_eq!(payload.comment, None);
        assert_eq!(payload.image_url, None);
        assert_eq!(payload.yum_factor, Some(9));
    }

    #[test]
    fn create_payload_ignores_client_supplied_id() {
        let payload: CreateCakePayload =
            serde_json::from_str(r#"{"id":"forged","comment":"moist"}"#).unwrap();

        assert_eq!(payload.comment.as_deref(), Some("moist"));
    }
}
