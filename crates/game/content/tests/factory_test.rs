use game_content::ContentFactory;
use game_core::{ConfigValue, Move, MoveField};

fn write(dir: &std::path::Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("write fixture");
}

#[test]
fn loads_moves_and_overrides_from_data_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        ContentFactory::MOVES_FILE,
        r#"#![enable(implicit_some)]
        {
            "scout": (Event: "Peek at the top card"),
            "hold": (Action: "Hold position"),
        }"#,
    );
    write(
        dir.path(),
        ContentFactory::OVERRIDES_FILE,
        "maxPlayers = 6\nvariant = \"coastal\"\n",
    );

    let factory = ContentFactory::new(dir.path());

    let table = factory.load_moves().expect("moves should load");
    assert_eq!(table.len(), 2);
    assert_eq!(
        table
            .get(&Move::from("scout"))
            .and_then(|r| r.field(MoveField::Event)),
        Some("Peek at the top card")
    );

    let overrides = factory.load_overrides().expect("overrides should load");
    assert_eq!(overrides.get("maxPlayers"), Some(&ConfigValue::Int(6)));
    assert_eq!(
        overrides.get("variant"),
        Some(&ConfigValue::Text("coastal".into()))
    );
}

#[test]
fn missing_overrides_file_is_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let factory = ContentFactory::new(dir.path());

    assert!(factory.load_overrides().expect("no file is fine").is_empty());
}

#[test]
fn missing_moves_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let factory = ContentFactory::new(dir.path());

    let err = factory.load_moves().unwrap_err();
    assert!(err.to_string().contains("moves.ron"));
}
