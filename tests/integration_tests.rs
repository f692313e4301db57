use folio_render::{CliConfig, LocalStorage, PublishPipeline, RenderEngine};
use serde_json::json;
use tempfile::TempDir;

fn write_records(dir: &TempDir, records: serde_json::Value) -> String {
    let records_path = dir.path().join("portfolios.json");
    std::fs::write(&records_path, records.to_string()).unwrap();
    records_path.to_str().unwrap().to_string()
}

fn config_for(dir: &TempDir, records_file: String) -> CliConfig {
    CliConfig {
        records_file,
        output_path: dir.path().join("public").to_str().unwrap().to_string(),
        base_url: "https://folio.example.com".to_string(),
        output_formats: vec!["json".to_string(), "html".to_string()],
        template: None,
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_publish_run() {
    let temp_dir = TempDir::new().unwrap();
    let records = json!([
        {
            "id": "p-1",
            "username": "alice",
            "display_name": "Alice Chen",
            "template": {"id": "t-1", "category": "engineer"},
            "published_at": "2024-01-15T10:30:00Z",
            "content": {
                "bio": "Backend engineer.",
                "projects": [{"name": "folio", "year": 2024}],
                "skills": ["rust", "sql"]
            }
        },
        {
            "id": "p-2",
            "username": "Bob Marley Jr",
            "template": {"id": "t-2", "category": "marketer"},
            "published_at": "2024-03-01T08:00:00+02:00",
            "content": {
                "bio": "Growth marketing.",
                "campaigns": [{"name": "launch"}]
            }
        }
    ]);

    let records_file = write_records(&temp_dir, records);
    let config = config_for(&temp_dir, records_file);
    let output_path = config.output_path.clone();

    let storage = LocalStorage::new(".".to_string());
    let pipeline = PublishPipeline::new(storage, config);
    let engine = RenderEngine::new(pipeline);

    let manifest_path = engine.run().await.unwrap();
    assert!(manifest_path.ends_with("manifest.json"));

    // Both pages written, slug derived from the username
    let alice_page = std::path::Path::new(&output_path).join("alice.json");
    let bob_page = std::path::Path::new(&output_path).join("bob-marley-jr.json");
    assert!(alice_page.exists());
    assert!(bob_page.exists());
    assert!(std::path::Path::new(&output_path).join("alice.html").exists());

    let alice: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&alice_page).unwrap()).unwrap();
    assert_eq!(alice["template"], json!("engineer"));
    assert_eq!(alice["page_url"], json!("https://folio.example.com/u/alice"));
    // Timestamp came back in canonical UTC millisecond form
    assert_eq!(alice["published_at"], json!("2024-01-15T10:30:00.000Z"));

    let bob: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&bob_page).unwrap()).unwrap();
    assert_eq!(bob["published_at"], json!("2024-03-01T06:00:00.000Z"));

    // Manifest lists both pages
    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&manifest_path).unwrap()).unwrap();
    assert_eq!(manifest["page_count"], json!(2));
}

#[tokio::test]
async fn test_unknown_category_publishes_with_general_template() {
    let temp_dir = TempDir::new().unwrap();
    let records = json!([
        {
            "id": "p-3",
            "username": "casey",
            "template": {"category": "influencer"},
            "content": {"bio": "hi"}
        }
    ]);

    let records_file = write_records(&temp_dir, records);
    let config = config_for(&temp_dir, records_file);
    let output_path = config.output_path.clone();

    let storage = LocalStorage::new(".".to_string());
    let pipeline = PublishPipeline::new(storage, config);
    let engine = RenderEngine::new(pipeline);

    engine.run().await.unwrap();

    let page: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(std::path::Path::new(&output_path).join("casey.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(page["template"], json!("general"));
}

#[tokio::test]
async fn test_missing_template_publishes_with_general_template() {
    let temp_dir = TempDir::new().unwrap();
    let records = json!([
        {
            "id": "p-4",
            "username": "drew",
            "content": {"bio": "no template chosen yet"}
        }
    ]);

    let records_file = write_records(&temp_dir, records);
    let config = config_for(&temp_dir, records_file);
    let output_path = config.output_path.clone();

    let storage = LocalStorage::new(".".to_string());
    let pipeline = PublishPipeline::new(storage, config);
    let engine = RenderEngine::new(pipeline);

    engine.run().await.unwrap();

    let page: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(std::path::Path::new(&output_path).join("drew.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(page["template"], json!("general"));
}

#[tokio::test]
async fn test_invalid_timestamp_fails_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let records = json!([
        {
            "id": "p-5",
            "username": "erin",
            "template": {"category": "engineer"},
            "published_at": "not-a-date",
            "content": {"bio": "hi"}
        }
    ]);

    let records_file = write_records(&temp_dir, records);
    let config = config_for(&temp_dir, records_file);
    let output_path = config.output_path.clone();

    let storage = LocalStorage::new(".".to_string());
    let pipeline = PublishPipeline::new(storage, config);
    let engine = RenderEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();
    assert!(matches!(
        err,
        folio_render::FolioError::InvalidTemporalLiteral { .. }
    ));

    // Failed run writes nothing
    assert!(!std::path::Path::new(&output_path).join("erin.json").exists());
}

#[tokio::test]
async fn test_template_override_applies_to_every_record() {
    let temp_dir = TempDir::new().unwrap();
    let records = json!([
        {
            "id": "p-6",
            "username": "flora",
            "template": {"category": "engineer"},
            "content": {"bio": "hi", "gallery": [{"src": "a.jpg"}]}
        }
    ]);

    let records_file = write_records(&temp_dir, records);
    let mut config = config_for(&temp_dir, records_file);
    config.template = Some("photographer".to_string());
    let output_path = config.output_path.clone();

    let storage = LocalStorage::new(".".to_string());
    let pipeline = PublishPipeline::new(storage, config);
    let engine = RenderEngine::new(pipeline);

    engine.run().await.unwrap();

    let page: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(std::path::Path::new(&output_path).join("flora.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(page["template"], json!("photographer"));
}
