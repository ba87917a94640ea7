use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, RawQuery, State},
    http::{HeaderMap, Method, StatusCode},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// In-memory store of generic JSON records keyed by generated id.
pub type Db = Arc<RwLock<HashMap<Uuid, Value>>>;

/// Wire-level reflection of a request, served by `/echo`.
#[derive(Debug, Serialize)]
pub struct EchoReply {
    pub method: String,
    pub query: String,
    pub headers: Map<String, Value>,
    pub body: String,
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/records", get(list_records).post(create_record))
        .route(
            "/records/{id}",
            get(get_record).put(update_record).delete(delete_record),
        )
        .route("/echo", any(echo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// Every error path answers with a JSON body so clients that decode
// unconditionally still get valid JSON back.
fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"error": "not found"})))
}

async fn list_records(State(db): State<Db>) -> Json<Vec<Value>> {
    let records = db.read().await;
    Json(records.values().cloned().collect())
}

async fn create_record(
    State(db): State<Db>,
    Json(input): Json<Map<String, Value>>,
) -> (StatusCode, Json<Value>) {
    let id = Uuid::new_v4();
    let mut fields = input;
    fields.insert("id".to_string(), json!(id));
    let record = Value::Object(fields);
    db.write().await.insert(id, record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn get_record(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let records = db.read().await;
    records.get(&id).cloned().map(Json).ok_or_else(not_found)
}

/// Shallow-merge the supplied fields into the stored record.
async fn update_record(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<Map<String, Value>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut records = db.write().await;
    let record = records.get_mut(&id).ok_or_else(not_found)?;
    if let Value::Object(fields) = record {
        for (key, value) in input {
            fields.insert(key, value);
        }
    }
    Ok(Json(record.clone()))
}

async fn delete_record(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut records = db.write().await;
    records
        .remove(&id)
        .map(|_| Json(json!({"deleted": id})))
        .ok_or_else(not_found)
}

/// Reflect the request back as JSON so client tests can assert what actually
/// crossed the wire.
async fn echo(
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: String,
) -> Json<EchoReply> {
    let headers: Map<String, Value> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                json!(value.to_str().unwrap_or_default()),
            )
        })
        .collect();
    Json(EchoReply {
        method: method.as_str().to_string(),
        query: query.unwrap_or_default(),
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_reply_serializes_all_fields() {
        let mut headers = Map::new();
        headers.insert("content-type".to_string(), json!("application/json"));
        let reply = EchoReply {
            method: "POST".to_string(),
            query: "a=1".to_string(),
            headers,
            body: "payload".to_string(),
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["method"], "POST");
        assert_eq!(value["query"], "a=1");
        assert_eq!(value["headers"]["content-type"], "application/json");
        assert_eq!(value["body"], "payload");
    }

    #[test]
    fn not_found_body_is_json() {
        let (status, Json(body)) = not_found();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not found");
    }

    #[test]
    fn uuid_serializes_to_hyphenated_string() {
        assert_eq!(
            json!(Uuid::nil()),
            json!("00000000-0000-0000-0000-000000000000")
        );
    }
}
