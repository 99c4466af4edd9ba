use taskboard::error::{exit_codes, Error, JsonError};

#[test]
fn exit_codes_map_correctly() {
    let user = Error::TaskNotFound(7);
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

    let user = Error::EpicNotFound(8);
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

    let user = Error::SubtaskNotFound(9);
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);
}

#[test]
fn messages_name_the_missing_identifier() {
    assert_eq!(Error::TaskNotFound(7).to_string(), "Task not found: 7");
    assert_eq!(Error::EpicNotFound(8).to_string(), "Epic not found: 8");
    assert_eq!(
        Error::SubtaskNotFound(9).to_string(),
        "Subtask not found: 9"
    );
}

#[test]
fn json_error_includes_code() {
    let err = Error::EpicNotFound(3);
    let json = JsonError::from(&err);
    assert_eq!(json.code, exit_codes::USER_ERROR);
    assert!(json.error.contains("Epic not found"));
}
