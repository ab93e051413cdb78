use linkboard::system::logging::init_logging;

// Single test in this file: the subscriber is process-global and can only
// be installed once.
#[test]
fn test_logging_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linkboard.log");

    let guard = init_logging(Some(&path), "info");
    tracing::info!("logging smoke test");
    drop(guard); // flush the non-blocking writer

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("logging smoke test"));
}
