use directapply::observability::FileWriter;
use tempfile::tempdir;

#[test]
fn appends_lines() {
    let dir = tempdir().unwrap();
    let writer = FileWriter::new(dir.path().join("directapply-trace.jsonl"));

    writer.write_line(r#"{"name":"a"}"#).unwrap();
    writer.write_line(r#"{"name":"b"}"#).unwrap();

    let contents = std::fs::read_to_string(writer.path()).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(writer.backups().unwrap().is_empty());
}

#[test]
fn rotates_and_keeps_newest_backups() {
    let dir = tempdir().unwrap();
    let writer = FileWriter::with_limits(dir.path().join("trace.jsonl"), 0, 2);

    for i in 0..6 {
        writer.write_line(&format!("line-{i:02}")).unwrap();
    }

    let backups = writer.backups().unwrap();
    assert_eq!(backups.len(), 2);

    let active = std::fs::read_to_string(writer.path()).unwrap();
    assert_eq!(active.trim(), "line-05");

    let newest = std::fs::read_to_string(&backups[0]).unwrap();
    assert_eq!(newest.trim(), "line-04");
}
