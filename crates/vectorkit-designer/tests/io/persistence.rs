use vectorkit_designer::{
    DocumentFile, DocumentPersistence, DocumentSnapshot, Editor, JsonFilePersistence,
    MemoryPersistence,
};

#[test]
fn test_missing_document_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let files = JsonFilePersistence::new(dir.path());
    assert!(files.load("nope").unwrap().is_none());
    assert!(MemoryPersistence::new().load("nope").unwrap().is_none());
}

#[test]
fn test_editor_save_and_load_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut files = JsonFilePersistence::new(dir.path().join("docs"));

    let mut editor = Editor::default();
    editor.name = "Flyer".to_string();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    editor.add_rect(10.0, 10.0, 20.0, 20.0, Some(&frame)).unwrap();
    editor.save(&mut files).unwrap();
    assert!(!editor.is_modified);
    assert!(files.path_for(&editor.document_id).exists());

    let mut reopened = Editor::default();
    assert!(reopened.load(&files, &editor.document_id).unwrap());
    assert_eq!(reopened.snapshot(), editor.snapshot());
    assert_eq!(reopened.document_id, editor.document_id);
    assert!(!reopened.can_undo());
    assert!(reopened.selection().is_empty());
}

#[test]
fn test_load_missing_keeps_current_document() {
    let mut store = MemoryPersistence::new();
    let mut editor = Editor::default();
    editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let before = editor.snapshot();

    assert!(!editor.load(&store, "other").unwrap());
    assert_eq!(editor.snapshot(), before);
    assert!(editor.can_undo());

    editor.save(&mut store).unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_ids_continue_after_load() {
    let mut store = MemoryPersistence::new();
    let mut editor = Editor::default();
    let first = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let second = editor.add_rect(20.0, 0.0, 10.0, 10.0, None).unwrap();
    editor.save(&mut store).unwrap();

    let mut reopened = Editor::default();
    reopened.load(&store, &editor.document_id).unwrap();
    let third = reopened.add_rect(40.0, 0.0, 10.0, 10.0, None).unwrap();

    assert_ne!(third, first);
    assert_ne!(third, second);
    assert_eq!(reopened.shapes().len(), 3);
}

#[test]
fn test_resave_keeps_creation_time() {
    let dir = tempfile::tempdir().unwrap();
    let mut files = JsonFilePersistence::new(dir.path());
    let mut snapshot = DocumentSnapshot::default();

    files.save("doc", &snapshot).unwrap();
    let created = DocumentFile::load_from_file(files.path_for("doc"))
        .unwrap()
        .metadata
        .created;

    snapshot.name = "Renamed".to_string();
    files.save("doc", &snapshot).unwrap();
    let file = DocumentFile::load_from_file(files.path_for("doc")).unwrap();
    assert_eq!(file.metadata.created, created);
    assert_eq!(file.metadata.name, "Renamed");
    assert!(file.metadata.modified >= created);
}

#[test]
fn test_raw_documents_from_other_versions_load() {
    let snapshot = DocumentSnapshot {
        name: "Legacy".to_string(),
        ..DocumentSnapshot::default()
    };
    let mut file = DocumentFile::from_snapshot(&snapshot);
    file.version = "0.9".to_string();

    let mut store = MemoryPersistence::new();
    store.insert_raw("legacy", file.to_json().unwrap());
    let loaded = store.load("legacy").unwrap().unwrap();
    assert_eq!(loaded, snapshot);
}

#[test]
fn test_corrupt_document_is_an_error() {
    let mut store = MemoryPersistence::new();
    store.insert_raw("broken", "[]");
    assert!(store.load("broken").is_err());

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.json"), "{").unwrap();
    let files = JsonFilePersistence::new(dir.path());
    assert!(files.load("broken").is_err());
}
