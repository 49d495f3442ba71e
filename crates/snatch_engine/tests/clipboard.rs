use std::ffi::OsString;

use snatch_engine::{ClipboardError, SystemClipboard};
use tempfile::TempDir;

#[test]
fn detect_reports_missing_tools() {
    let empty = TempDir::new().unwrap();
    let search_path = OsString::from(empty.path());
    let err = SystemClipboard::detect_in(&search_path).unwrap_err();
    assert!(matches!(err, ClipboardError::NoTool { .. }), "{err:?}");
}

#[test]
fn detect_finds_platform_tool_on_path() {
    let bin = TempDir::new().unwrap();
    for name in ["pbcopy", "clip.exe", "wl-copy", "xclip", "xsel"] {
        std::fs::write(bin.path().join(name), "").unwrap();
    }
    let search_path = OsString::from(bin.path());
    let clipboard = SystemClipboard::detect_in(&search_path).unwrap();
    assert_eq!(clipboard.program().parent(), Some(bin.path()));
}

#[cfg(unix)]
#[test]
fn system_clipboard_pipes_text_and_reports_failure() {
    use std::os::unix::fs::PermissionsExt;

    use snatch_engine::ClipboardSink;

    let dir = TempDir::new().unwrap();
    let captured = dir.path().join("captured.txt");

    let script = dir.path().join("fake-copy");
    std::fs::write(
        &script,
        format!("#!/bin/sh\ncat > '{}'\n", captured.display()),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let failing = dir.path().join("failing-copy");
    std::fs::write(&failing, "#!/bin/sh\ncat > /dev/null\necho 'no display' >&2\nexit 3\n")
        .unwrap();
    std::fs::set_permissions(&failing, std::fs::Permissions::from_mode(0o755)).unwrap();

    let text = "[a : One](https://a.example.com/)\n[it's : Two](https://b.example.com/)";
    SystemClipboard::new(&script, Vec::new()).copy(text).unwrap();
    assert_eq!(std::fs::read_to_string(&captured).unwrap(), text);

    let err = SystemClipboard::new(&failing, Vec::new())
        .copy(text)
        .unwrap_err();
    match err {
        ClipboardError::Failed { stderr, .. } => assert_eq!(stderr, "no display"),
        other => panic!("unexpected error {other:?}"),
    }
}
