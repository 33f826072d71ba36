//! Integration tests for the activity catalog and checklist result store.
//!
//! Exercises the repository layer against a real SQLite database:
//! - Category filtering and ordering of the checklist loader query
//! - Result inserts, including the general-observation sentinel row
//! - The full load -> select -> save flow through the core session

use fieldops_core::checklist::{
    ChecklistCategory, ChecklistSession, SelectionMode, GENERAL_OBSERVATION_ACTIVITY_ID,
};
use fieldops_db::models::activity::{CreateActivity, CreateActivityResponse};
use fieldops_db::repositories::{ActivityRepo, ResultRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_activity(
    pool: &SqlitePool,
    name: &str,
    category: ChecklistCategory,
    mode: SelectionMode,
    position: i64,
    responses: &[(&str, &str)],
) -> i64 {
    let activity_id = ActivityRepo::create(
        pool,
        &CreateActivity {
            name: name.to_string(),
            category,
            selection_mode: mode,
            position,
        },
    )
    .await
    .expect("activity insert should succeed");

    for (i, (label, value)) in responses.iter().enumerate() {
        ActivityRepo::add_response(
            pool,
            &CreateActivityResponse {
                activity_id,
                label: label.to_string(),
                value: value.to_string(),
                is_affirmative: i == 0,
                position: i as i64,
            },
        )
        .await
        .expect("response insert should succeed");
    }

    activity_id
}

// ---------------------------------------------------------------------------
// Loader query
// ---------------------------------------------------------------------------

/// Loading a category returns only that category's activities, in position
/// order, each with its responses attached in order.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_with_responses_filters_and_orders(pool: SqlitePool) {
    seed_activity(
        &pool,
        "Lubricación",
        ChecklistCategory::Preventivo,
        SelectionMode::Single,
        1,
        &[("Realizado", "realizado"), ("No fue necesario", "nfn")],
    )
    .await;
    seed_activity(
        &pool,
        "Limpieza",
        ChecklistCategory::Preventivo,
        SelectionMode::Single,
        0,
        &[("Realizado", "realizado")],
    )
    .await;
    seed_activity(
        &pool,
        "Síntomas",
        ChecklistCategory::Diagnostico,
        SelectionMode::Multi,
        0,
        &[("Ruido", "ruido")],
    )
    .await;

    let items = ActivityRepo::list_with_responses(&pool, ChecklistCategory::Preventivo)
        .await
        .expect("load should succeed");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].activity.name, "Limpieza");
    assert_eq!(items[1].activity.name, "Lubricación");
    assert_eq!(items[1].responses.len(), 2);
    assert_eq!(items[1].responses[0].label, "Realizado");
    assert!(items[1].responses[0].is_affirmative);
    assert!(!items[1].responses[1].is_affirmative);
}

/// An empty category is a valid, empty checklist.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_category_loads_empty(pool: SqlitePool) {
    let items = ActivityRepo::list_with_responses(&pool, ChecklistCategory::Correctivo)
        .await
        .expect("load should succeed");
    assert!(items.is_empty());
}

// ---------------------------------------------------------------------------
// Save flow
// ---------------------------------------------------------------------------

/// The full flow: load a category, build a session (defaults applied),
/// toggle a multi response, save, and read the rows back.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_load_select_save_round_trip(pool: SqlitePool) {
    let single_id = seed_activity(
        &pool,
        "Cambio de filtros",
        ChecklistCategory::Preventivo,
        SelectionMode::Single,
        0,
        &[("Realizado", "realizado"), ("No fue necesario", "nfn")],
    )
    .await;
    let multi_id = seed_activity(
        &pool,
        "Ajustes",
        ChecklistCategory::Preventivo,
        SelectionMode::Multi,
        1,
        &[("Pernos", "pernos"), ("Correas", "correas")],
    )
    .await;

    let items = ActivityRepo::list_with_responses(&pool, ChecklistCategory::Preventivo)
        .await
        .unwrap();
    let mut session = ChecklistSession::new(ChecklistCategory::Preventivo, items);

    // Default: the single activity preselected "No fue necesario".
    assert_eq!(session.entries[0].selected.len(), 1);

    let pernos = session
        .response(multi_id, session.entries[1].responses[0].id)
        .unwrap()
        .clone();
    session.select(multi_id, pernos);
    session.set_note(multi_id, "reapriete completo");
    session.set_general_observation("equipo en buen estado");

    let rows = session.results("EQ-BOMBA-01");
    assert_eq!(rows.len(), 3);
    for row in &rows {
        ResultRepo::insert(&pool, row, None)
            .await
            .expect("result insert should succeed");
    }

    let stored = ResultRepo::list_for_equipment(&pool, "EQ-BOMBA-01")
        .await
        .unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[0].activity_id, single_id);
    assert_eq!(stored[0].value, "nfn");
    assert_eq!(stored[1].activity_id, multi_id);
    assert_eq!(stored[1].note, "reapriete completo");

    let sentinel = &stored[2];
    assert_eq!(sentinel.activity_id, GENERAL_OBSERVATION_ACTIVITY_ID);
    assert_eq!(sentinel.value, "preventivo");
    assert_eq!(sentinel.note, "equipo en buen estado");
}

/// Results are keyed by equipment code; other equipment stays untouched.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_results_scoped_by_equipment_code(pool: SqlitePool) {
    let activity_id = seed_activity(
        &pool,
        "Inspección",
        ChecklistCategory::Correctivo,
        SelectionMode::Single,
        0,
        &[("Realizado", "realizado")],
    )
    .await;

    let items = ActivityRepo::list_with_responses(&pool, ChecklistCategory::Correctivo)
        .await
        .unwrap();
    let mut session = ChecklistSession::new(ChecklistCategory::Correctivo, items);
    let realizado = session.entries[0].responses[0].clone();
    session.select(activity_id, realizado);

    for row in session.results("EQ-A") {
        ResultRepo::insert(&pool, &row, None).await.unwrap();
    }

    assert_eq!(
        ResultRepo::list_for_equipment(&pool, "EQ-A").await.unwrap().len(),
        1
    );
    assert!(ResultRepo::list_for_equipment(&pool, "EQ-B")
        .await
        .unwrap()
        .is_empty());
}
