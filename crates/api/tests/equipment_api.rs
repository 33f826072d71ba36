//! HTTP-level integration tests for equipment photos and finalization.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_technician, get_auth, login_for_token, post_json_auth};
use fieldops_core::types::DbId;
use fieldops_db::models::equipment::CreateEquipment;
use fieldops_db::models::task::CreateTask;
use fieldops_db::repositories::{EquipmentRepo, TaskRepo};
use sqlx::SqlitePool;

async fn seed_equipment(pool: &SqlitePool, technician_id: DbId) -> DbId {
    let task = TaskRepo::create(
        pool,
        &CreateTask {
            code: "OT-1001".into(),
            title: "Orden OT-1001".into(),
            description: None,
            scheduled_for: None,
            technician_id,
        },
    )
    .await
    .unwrap();

    EquipmentRepo::create(
        pool,
        &CreateEquipment {
            task_id: task.id,
            code: "EQ-AC-31".into(),
            name: "Aire acondicionado piso 3".into(),
            location: Some("Piso 3".into()),
            equipment_type: Some("climatizacion".into()),
        },
    )
    .await
    .unwrap()
    .id
}

/// Recording a photo returns 201 and the photo lists back.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_and_list_photos(pool: SqlitePool) {
    let (user, password) = create_technician(&pool, "marisol").await;
    let equipment_id = seed_equipment(&pool, user.id).await;
    let app = common::build_test_app(pool);
    let token = login_for_token(app.clone(), "marisol", &password).await;

    let body = serde_json::json!({
        "file_path": "/storage/photos/eq-ac-31/antes.jpg",
        "caption": "Estado inicial",
    });
    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/equipment/{equipment_id}/photos"),
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["caption"], "Estado inicial");
    assert_eq!(json["data"]["taken_by"], user.id);

    let response = get_auth(
        app,
        &format!("/api/v1/equipment/{equipment_id}/photos"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

/// A photo with an empty file path is rejected with 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_photo_requires_file_path(pool: SqlitePool) {
    let (user, password) = create_technician(&pool, "marisol").await;
    let equipment_id = seed_equipment(&pool, user.id).await;
    let app = common::build_test_app(pool);
    let token = login_for_token(app.clone(), "marisol", &password).await;

    let body = serde_json::json!({ "file_path": "" });
    let response = post_json_auth(
        app,
        &format!("/api/v1/equipment/{equipment_id}/photos"),
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Finalizing an equipment unit succeeds once; a second attempt is 409.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_finalize_equipment_once(pool: SqlitePool) {
    let (user, password) = create_technician(&pool, "marisol").await;
    let equipment_id = seed_equipment(&pool, user.id).await;
    let app = common::build_test_app(pool);
    let token = login_for_token(app.clone(), "marisol", &password).await;

    let body = serde_json::json!({
        "summary": "Se cambió el filtro y quedó operativo",
        "operational": true,
    });
    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/equipment/{equipment_id}/finalization"),
        &token,
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["operational"], true);
    assert_eq!(json["data"]["recorded_by"], user.id);

    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/equipment/{equipment_id}/finalization"),
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get_auth(
        app,
        &format!("/api/v1/equipment/{equipment_id}/finalization"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["summary"],
        "Se cambió el filtro y quedó operativo"
    );
}

/// Finalization before any exists is a 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_finalization_missing(pool: SqlitePool) {
    let (user, password) = create_technician(&pool, "marisol").await;
    let equipment_id = seed_equipment(&pool, user.id).await;
    let app = common::build_test_app(pool);
    let token = login_for_token(app.clone(), "marisol", &password).await;

    let response = get_auth(
        app,
        &format!("/api/v1/equipment/{equipment_id}/finalization"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
