//! Store-level tests against the SQLite backend
//!
//! These exercise the PeakStore contract: CRUD round trips, typed not-found
//! results, and the literal bounding-box predicate.

use summit::store::sqlite::SqliteStore;
use summit::store::PeakStore;
use summit::types::{BoundingBox, NewPeak, SEED_PEAKS};
use summit::Error;
use tempfile::TempDir;

async fn seeded_store() -> (TempDir, SqliteStore) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("peaks.db");
    let store = SqliteStore::open(path.to_str().unwrap()).await.unwrap();
    store.migrate().await.unwrap();
    store.reset_and_seed().await.unwrap();
    (dir, store)
}

fn aneto() -> NewPeak {
    NewPeak {
        name: "Aneto".to_string(),
        alt: 3404,
        lat: 42.6006,
        lon: 0.6578,
    }
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let (_dir, store) = seeded_store().await;

    let created = store.create(aneto()).await.unwrap();
    let fetched = store.get(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Aneto");
    assert_eq!(fetched.alt, 3404);
    assert_eq!(fetched.lat, 42.6006);
    assert_eq!(fetched.lon, 0.6578);
}

#[tokio::test]
async fn create_assigns_fresh_unique_ids() {
    let (_dir, store) = seeded_store().await;

    let first = store.create(aneto()).await.unwrap();
    let second = store.create(aneto()).await.unwrap();

    assert_ne!(first.id, second.id);
    // Same name twice is allowed: no uniqueness constraint.
    assert_eq!(first.name, second.name);
}

#[tokio::test]
async fn list_contains_seeds_plus_created() {
    let (_dir, store) = seeded_store().await;

    assert_eq!(store.list().await.unwrap().len(), SEED_PEAKS.len());

    let n = 3;
    for _ in 0..n {
        store.create(aneto()).await.unwrap();
    }

    let peaks = store.list().await.unwrap();
    assert_eq!(peaks.len(), SEED_PEAKS.len() + n);
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_id() {
    let (_dir, store) = seeded_store().await;
    let created = store.create(aneto()).await.unwrap();

    let replacement = NewPeak {
        name: "Mont Bleu".to_string(),
        alt: 9999,
        lat: 1.2345,
        lon: 6.7890,
    };
    store.update(created.id, replacement.clone()).await.unwrap();

    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, replacement.name);
    assert_eq!(fetched.alt, replacement.alt);
    assert_eq!(fetched.lat, replacement.lat);
    assert_eq!(fetched.lon, replacement.lon);
}

#[tokio::test]
async fn repeated_identical_update_is_idempotent() {
    let (_dir, store) = seeded_store().await;
    let created = store.create(aneto()).await.unwrap();

    store.update(created.id, aneto()).await.unwrap();
    let first = store.get(created.id).await.unwrap();

    store.update(created.id, aneto()).await.unwrap();
    let second = store.get(created.id).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn update_absent_id_is_not_found() {
    let (_dir, store) = seeded_store().await;

    let err = store.update(999_999, aneto()).await.unwrap_err();
    assert!(matches!(err, Error::PeakNotFound(999_999)));
}

#[tokio::test]
async fn get_absent_id_is_not_found() {
    let (_dir, store) = seeded_store().await;

    let err = store.get(999_999).await.unwrap_err();
    assert!(matches!(err, Error::PeakNotFound(999_999)));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let (_dir, store) = seeded_store().await;
    let created = store.create(aneto()).await.unwrap();

    store.delete(created.id).await.unwrap();

    let err = store.get(created.id).await.unwrap_err();
    assert!(matches!(err, Error::PeakNotFound(_)));
}

#[tokio::test]
async fn repeated_delete_is_not_found_and_leaves_others_alone() {
    let (_dir, store) = seeded_store().await;
    let created = store.create(aneto()).await.unwrap();
    let before = store.count().await.unwrap();

    store.delete(created.id).await.unwrap();
    let err = store.delete(created.id).await.unwrap_err();
    assert!(matches!(err, Error::PeakNotFound(_)));

    assert_eq!(store.count().await.unwrap(), before - 1);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let (_dir, store) = seeded_store().await;

    let first = store.create(aneto()).await.unwrap();
    store.delete(first.id).await.unwrap();

    let second = store.create(aneto()).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn bounding_box_over_seeds_is_exact() {
    let (_dir, store) = seeded_store().await;

    // -50 <= lat <= 70 and -169 <= lon <= -40: the Americas, minus Antarctica.
    let bbox = BoundingBox {
        lat_max: 70.0,
        lon_min: -169.0,
        lat_min: -50.0,
        lon_max: -40.0,
    };

    let mut names: Vec<String> = store
        .find_in_box(&bbox)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    names.sort();

    // Denali and Aconcagua qualify; Massif Vinson is below the lat_min bound
    // and Everest is outside the longitude range.
    assert_eq!(names, vec!["Aconcagua".to_string(), "Denali".to_string()]);
}

#[tokio::test]
async fn inverted_bounding_box_is_empty() {
    let (_dir, store) = seeded_store().await;

    let bbox = BoundingBox {
        lat_max: -50.0,
        lon_min: -169.0,
        lat_min: 70.0,
        lon_max: -40.0,
    };

    let peaks = store.find_in_box(&bbox).await.unwrap();
    assert!(peaks.is_empty());
}

#[tokio::test]
async fn reset_and_seed_replaces_existing_rows() {
    let (_dir, store) = seeded_store().await;

    store.create(aneto()).await.unwrap();
    store.reset_and_seed().await.unwrap();

    let peaks = store.list().await.unwrap();
    assert_eq!(peaks.len(), SEED_PEAKS.len());
    assert!(peaks.iter().all(|p| p.name != "Aneto"));
}
