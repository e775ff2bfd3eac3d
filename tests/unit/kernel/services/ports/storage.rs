use super::*;

#[test]
fn io_error_display_names_action_and_path() {
    let err = IoError::new(IoErrorKind::Read, "/tmp/missing.txt", "No such file");
    let text = err.to_string();
    assert!(text.starts_with("Could not open file"));
    assert!(text.contains("/tmp/missing.txt"));
    assert!(text.ends_with("No such file"));
}

#[test]
fn io_error_from_io_keeps_cause_message() {
    let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = IoError::from_io(IoErrorKind::Create, Path::new("a.txt"), cause);
    assert_eq!(err.kind, IoErrorKind::Create);
    assert_eq!(err.path, PathBuf::from("a.txt"));
    assert_eq!(err.message, "denied");
    assert!(err.to_string().contains("create"));
}

#[test]
fn kind_display_uses_user_facing_verbs() {
    assert_eq!(IoErrorKind::Read.to_string(), "open");
    assert_eq!(IoErrorKind::Write.to_string(), "save");
    assert_eq!(IoErrorKind::Create.to_string(), "create");
}
