use move_manifest::core::ConfigProvider;
use move_manifest::{LabelSelection, LabelSheet, LocalStorage, Manifest, ManifestConfig, Orientation};
use tempfile::TempDir;

fn config_for(dir: &TempDir) -> ManifestConfig {
    let mut config = ManifestConfig::default();
    config.storage.data_dir = dir.path().to_str().unwrap().to_string();
    config
}

async fn open(config: &ManifestConfig) -> Manifest<LocalStorage> {
    let storage = LocalStorage::new(config.data_dir().to_string());
    Manifest::open(storage, config).await.unwrap()
}

#[tokio::test]
async fn test_end_to_end_export_import_and_labels() {
    let source_dir = TempDir::new().unwrap();
    let source_config = config_for(&source_dir);
    let mut source = open(&source_config).await;

    source
        .add_box(2, "Kitchen, Main", &["Plate \"set\"".to_string(), "Cups".to_string()])
        .await
        .unwrap();
    source.add_box(1, "Bedroom", &[]).await.unwrap();

    let stored = source_dir.path().join("move-manifest-boxes.json");
    assert!(stored.exists());

    let csv = source.export_csv();
    assert_eq!(
        csv,
        "number,room,item\n1,Bedroom,\n2,\"Kitchen, Main\",\"Plate \"\"set\"\"\"\n2,\"Kitchen, Main\",Cups"
    );

    let target_dir = TempDir::new().unwrap();
    let target_config = config_for(&target_dir);
    let mut target = open(&target_config).await;
    let count = target.import_csv(&csv).await.unwrap();
    assert_eq!(count, 2);
    assert_eq!(target.export_csv(), csv);

    let reopened = open(&target_config).await;
    assert_eq!(reopened.boxes(), target.boxes());
    assert_eq!(reopened.next_box_number(), 3);

    let generated = reopened
        .generate_labels(&LabelSelection::all(), &LabelSheet::new(8.0))
        .unwrap();
    assert_eq!(generated.orientation, Orientation::Landscape);
    assert_eq!(generated.box_count, 2);
    assert_eq!(generated.message, "Generated 2 packing labels.");
    assert!(generated.html.contains("Box 2 • Kitchen, Main"));
    assert!(generated.html.contains("Plate &quot;set&quot;"));
}

#[tokio::test]
async fn test_corrupt_store_opens_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("move-manifest-boxes.json"), "{ not json").unwrap();

    let manifest = open(&config_for(&dir)).await;

    assert!(manifest.boxes().is_empty());
    assert_eq!(manifest.next_box_number(), 1);
}

#[tokio::test]
async fn test_label_width_is_remembered_between_sessions() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);

    let manifest = open(&config).await;
    assert_eq!(manifest.label_width().await.unwrap(), 15.0);
    manifest.remember_label_width(11.5).await.unwrap();

    let reopened = open(&config).await;
    assert_eq!(reopened.label_width().await.unwrap(), 11.5);
}

#[tokio::test]
async fn test_excluded_boxes_are_left_off_the_sheet() {
    let dir = TempDir::new().unwrap();
    let mut manifest = open(&config_for(&dir)).await;

    let kept = manifest.add_box(1, "Office", &["Laptop".to_string()]).await.unwrap();
    let skipped = manifest.add_box(2, "Garage", &["Rake".to_string()]).await.unwrap();

    let mut selection = LabelSelection::all();
    selection.toggle(&skipped);
    assert!(selection.is_selected(&kept));

    let generated = manifest
        .generate_labels(&selection, &LabelSheet::new(10.0))
        .unwrap();

    assert_eq!(generated.box_count, 1);
    assert!(generated.html.contains("Laptop"));
    assert!(!generated.html.contains("Rake"));
}

#[tokio::test]
async fn test_only_listed_boxes_reach_the_sheet() {
    let dir = TempDir::new().unwrap();
    let mut manifest = open(&config_for(&dir)).await;

    let office = manifest.add_box(1, "Office", &["Laptop".to_string()]).await.unwrap();
    manifest.add_box(2, "Garage", &["Rake".to_string()]).await.unwrap();
    let den = manifest.add_box(3, "Den", &["Rug".to_string()]).await.unwrap();

    let selection = LabelSelection::only(manifest.boxes(), &[office, den.clone()]).without([den]);
    let generated = manifest
        .generate_labels(&selection, &LabelSheet::new(10.0))
        .unwrap();

    assert_eq!(generated.box_count, 1);
    assert!(generated.html.contains("Laptop"));
    assert!(!generated.html.contains("Rake"));
    assert!(!generated.html.contains("Rug"));
}
