use crate::admin_commands::AdminCommands;
use crate::cli::Cli;
use crate::commands::{Commands, LeaveStatus};

use clap::Parser;
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, some};

#[test]
fn given_global_flags_after_subcommand_when_parse_then_applied() {
    let cli = Cli::try_parse_from([
        "skud",
        "leave",
        "day-off",
        "--server",
        "http://10.0.0.5:8000",
        "--lat",
        "-33.9",
        "--lon",
        "18.4",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Commands::Leave {
            status: LeaveStatus::DayOff
        }
    ));
    assert_that!(cli.server.as_deref(), some(eq("http://10.0.0.5:8000")));
    assert_eq!(cli.lat, Some(-33.9));
    assert_eq!(cli.lon, Some(18.4));
}

#[test]
fn given_unquoted_name_when_parse_register_then_words_collected() {
    let cli = Cli::try_parse_from(["skud", "register", "Ann", "Lee"]).unwrap();

    let Commands::Register { full_name } = cli.command else {
        panic!("expected register");
    };
    assert_eq!(full_name.join(" "), "Ann Lee");
}

#[test]
fn given_lat_without_lon_when_parse_then_rejected() {
    assert_that!(
        Cli::try_parse_from(["skud", "--lat", "55.7", "show"]),
        err(anything())
    );
}

#[test]
fn given_inside_as_leave_status_when_parse_then_rejected() {
    assert_that!(
        Cli::try_parse_from(["skud", "leave", "inside"]),
        err(anything())
    );
}

#[test]
fn given_admin_reset_when_parse_then_confirmation_flag_defaults_off() {
    let cli = Cli::try_parse_from(["skud", "admin", "reset"]).unwrap();

    assert!(matches!(
        cli.command,
        Commands::Admin {
            action: AdminCommands::Reset { yes: false }
        }
    ));
    assert_that!(
        Cli::try_parse_from(["skud", "admin", "delete", "42", "--pretty"]),
        ok(anything())
    );
}
