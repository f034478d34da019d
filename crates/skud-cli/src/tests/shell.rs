use crate::shell::ShellCommand;

use skud_core::PresenceStatus;

#[test]
fn test_parse_commands() {
    assert_eq!(
        ShellCommand::parse("register  Ann   Lee "),
        Ok(Some(ShellCommand::Register("Ann   Lee".to_string())))
    );
    assert_eq!(
        ShellCommand::parse("leave day-off"),
        Ok(Some(ShellCommand::Leave(PresenceStatus::DayOff)))
    );
    assert_eq!(
        ShellCommand::parse("leave WORK"),
        Ok(Some(ShellCommand::Leave(PresenceStatus::Work)))
    );
    assert_eq!(ShellCommand::parse("return"), Ok(Some(ShellCommand::Return)));
    assert_eq!(ShellCommand::parse("back"), Ok(Some(ShellCommand::Back)));
    assert_eq!(ShellCommand::parse("status"), Ok(Some(ShellCommand::Status)));
    assert_eq!(ShellCommand::parse("exit"), Ok(Some(ShellCommand::Quit)));
}

#[test]
fn test_parse_blank_line() {
    assert_eq!(ShellCommand::parse("   "), Ok(None));
}

#[test]
fn test_parse_register_without_name_defers_to_validation() {
    // The client rejects the empty name with its own notification
    assert_eq!(
        ShellCommand::parse("register"),
        Ok(Some(ShellCommand::Register(String::new())))
    );
}

#[test]
fn test_parse_errors() {
    assert!(ShellCommand::parse("leave inside").is_err());
    assert!(ShellCommand::parse("leave").is_err());
    assert!(ShellCommand::parse("dance").is_err());
}
