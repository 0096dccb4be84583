use chrono::Utc;
use httpmock::prelude::*;
use roster_import::adapters::{AutoConfirm, CsvSource, HttpStore};
use roster_import::core::importer::BatchImporter;
use roster_import::domain::model::{ClientRecord, ClientStatus};
use roster_import::domain::ports::RecordStore;
use roster_import::ImportError;
use std::io::Write;
use tempfile::TempDir;

fn record(name: &str, email: &str) -> ClientRecord {
    ClientRecord {
        name: name.to_string(),
        email: email.to_string(),
        phone: String::new(),
        whatsapp: String::new(),
        status: ClientStatus::Active,
        active_plan: String::new(),
        goals: String::new(),
        notes: String::new(),
        birth_date: None,
        registration_date: None,
        due_date: None,
        access_enabled: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_insert_batch_posts_records_and_parses_count() {
    let server = MockServer::start();
    let store_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/clients/insert-batch")
            .json_body_partial(
                r#"{"records": [{"name": "Ana", "email": "a@b.com"}, {"name": "Bia", "email": "b@b.com"}]}"#,
            );
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"inserted_count": 2}));
    });

    let store = HttpStore::new(server.url("/clients/insert-batch"));
    let outcome = store
        .insert_batch(&[record("Ana", "a@b.com"), record("Bia", "b@b.com")])
        .await
        .unwrap();

    store_mock.assert();
    assert_eq!(outcome.inserted_count, 2);
}

#[tokio::test]
async fn test_insert_batch_accepts_camel_case_response() {
    let server = MockServer::start();
    let store_mock = server.mock(|when, then| {
        when.method(POST).path("/insert");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"insertedCount": 1}));
    });

    let store = HttpStore::new(server.url("/insert"));
    let outcome = store.insert_batch(&[record("Ana", "a@b.com")]).await.unwrap();

    store_mock.assert();
    assert_eq!(outcome.inserted_count, 1);
}

#[tokio::test]
async fn test_insert_batch_surfaces_store_rejection() {
    let server = MockServer::start();
    let store_mock = server.mock(|when, then| {
        when.method(POST).path("/insert");
        then.status(409).body("duplicate email: a@b.com");
    });

    let store = HttpStore::new(server.url("/insert"));
    let err = store
        .insert_batch(&[record("Ana", "a@b.com")])
        .await
        .unwrap_err();

    store_mock.assert();
    match err {
        ImportError::StoreCommitError { message } => {
            assert!(message.contains("409"));
            assert!(message.contains("duplicate email"));
        }
        other => panic!("expected store commit error, got {}", other),
    }
}

#[tokio::test]
async fn test_end_to_end_import_against_http_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clientes.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"Nome,Status\nAna Silva,PB15\n,PB15\n").unwrap();

    let server = MockServer::start();
    let store_mock = server.mock(|when, then| {
        when.method(POST).path("/insert");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"inserted_count": 1}));
    });

    let importer = BatchImporter::new(HttpStore::new(server.url("/insert")), AutoConfirm);
    let report = importer.run(&CsvSource::new(path, 0)).await.unwrap();

    store_mock.assert();
    assert_eq!(report.rows_read, 2);
    assert_eq!(report.synthesized, 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.inserted_count, 1);
}

#[tokio::test]
async fn test_empty_batch_never_reaches_the_store() {
    let server = MockServer::start();
    let store_mock = server.mock(|when, then| {
        when.method(POST).path("/insert");
        then.status(200)
            .json_body(serde_json::json!({"inserted_count": 0}));
    });

    let importer = BatchImporter::new(HttpStore::new(server.url("/insert")), AutoConfirm);
    let report = importer.import_batch(vec![]).await.unwrap();

    assert_eq!(report.inserted_count, 0);
    store_mock.assert_hits(0);
}
