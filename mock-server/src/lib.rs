use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
}

#[derive(Deserialize)]
pub struct NewRecord {
    pub name: String,
    pub email: String,
    pub username: String,
}

/// Records in creation order.
pub type Db = Arc<RwLock<Vec<Record>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/todos", get(list_records).post(create_record))
        .route("/todos/{id}", delete(delete_record))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

async fn list_records(State(db): State<Db>) -> Json<Vec<Record>> {
    Json(db.read().await.clone())
}

async fn create_record(
    State(db): State<Db>,
    Json(input): Json<NewRecord>,
) -> (StatusCode, Json<Record>) {
    let record = Record {
        id: Uuid::new_v4(),
        name: input.name,
        email: input.email,
        username: input.username,
    };
    db.write().await.push(record.clone());
    info!(id = %record.id, "record created");
    (StatusCode::CREATED, Json(record))
}

async fn delete_record(State(db): State<Db>, Path(id): Path<Uuid>) -> StatusCode {
    let mut records = db.write().await;
    let Some(index) = records.iter().position(|r| r.id == id) else {
        return StatusCode::NOT_FOUND;
    };
    records.remove(index);
    info!(%id, "record deleted");
    StatusCode::NO_CONTENT
}
