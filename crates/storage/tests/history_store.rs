//! History store behaviour against a file-backed database.

use std::collections::HashSet;

use chrono::Utc;
use storage::Database;
use storage::models::Routine;
use storage::repository::scan::ScanRepository;
use storage::services::scoring::{InputVector, compute_score};
use tempfile::TempDir;

async fn open(dir: &TempDir) -> Database {
    let url = format!("sqlite://{}", dir.path().join("beauty.db").display());
    let db = Database::new(&url).await.unwrap();
    db.run_migrations().await.unwrap();
    db
}

#[tokio::test]
async fn test_history_survives_reopen() {
    let dir = TempDir::new().unwrap();

    let stored = {
        let db = open(&dir).await;
        let repo = ScanRepository::new(db.pool());
        let score = compute_score(&InputVector::new(6.0, 5.0, 5.0));
        let stored = repo
            .append(&score, &Routine::standard(), Utc::now())
            .await
            .unwrap();
        db.close().await;
        stored
    };

    let db = open(&dir).await;
    let repo = ScanRepository::new(db.pool());

    assert_eq!(repo.get_by_id(stored.id).await.unwrap(), stored);
    assert_eq!(repo.list_all().await.unwrap(), vec![stored]);
}

#[tokio::test]
async fn test_ids_keep_increasing_after_reopen() {
    let dir = TempDir::new().unwrap();
    let score = compute_score(&InputVector::new(8.0, 2.0, 6.0));

    let first = {
        let db = open(&dir).await;
        let id = ScanRepository::new(db.pool())
            .append(&score, &Routine::standard(), Utc::now())
            .await
            .unwrap()
            .id;
        db.close().await;
        id
    };

    let db = open(&dir).await;
    let second = ScanRepository::new(db.pool())
        .append(&score, &Routine::standard(), Utc::now())
        .await
        .unwrap()
        .id;

    assert!(second > first);
}

#[tokio::test]
async fn test_concurrent_appends_get_unique_ids() {
    let dir = TempDir::new().unwrap();
    let db = open(&dir).await;

    let mut handles = Vec::new();
    for i in 0..32 {
        let db = db.clone();
        handles.push(tokio::spawn(async move {
            let score = compute_score(&InputVector::new((i % 12) as f64, 5.0, 5.0));
            ScanRepository::new(db.pool())
                .append(&score, &Routine::standard(), Utc::now())
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()), "duplicate id assigned");
    }

    let repo = ScanRepository::new(db.pool());
    let scans = repo.list_all().await.unwrap();
    assert_eq!(scans.len(), 32);
    assert_eq!(repo.count().await.unwrap(), 32);
    assert!(scans.windows(2).all(|pair| pair[0].id > pair[1].id));
    assert_eq!(
        scans.iter().map(|scan| scan.id).collect::<HashSet<_>>(),
        ids
    );
}
