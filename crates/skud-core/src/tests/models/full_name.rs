use crate::{CoreError, FullName};

#[test]
fn test_full_name_trims_whitespace() {
    let name = FullName::parse("  Ann Lee \n").unwrap();
    assert_eq!(name.as_str(), "Ann Lee");
}

#[test]
fn test_full_name_rejects_short_input() {
    for input in ["", " ", "A", "  B  ", "\t\n"] {
        let err = FullName::parse(input).unwrap_err();
        assert!(
            matches!(err, CoreError::Validation { .. }),
            "expected validation error for {input:?}"
        );
        assert_eq!(err.user_message(), "Введите корректное ФИО");
    }
}

#[test]
fn test_full_name_counts_characters_not_bytes() {
    // One Cyrillic letter is two bytes in UTF-8
    assert!(FullName::parse("Я").is_err());
    assert!(FullName::parse("Ян").is_ok());
}

#[test]
fn test_full_name_serializes_as_plain_string() {
    let name = FullName::parse("Jo Smith").unwrap();
    assert_eq!(serde_json::to_string(&name).unwrap(), "\"Jo Smith\"");
}
