//! Interactive session driving one long-lived client.

use crate::commands::LeaveStatus;
use crate::error::Result as CliErrorResult;
use crate::resident::{drive, show};

use std::io::Write;

use clap::ValueEnum;
use log::debug;
use skud_client::PresenceClient;
use skud_core::PresenceStatus;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Команды: register <ФИО>, leave <work|day-off|request>, return, back, status, help, quit";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShellCommand {
    Register(String),
    Leave(PresenceStatus),
    Return,
    Back,
    Status,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line; `Ok(None)` for a blank line.
    pub(crate) fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "" => return Ok(None),
            "register" => Self::Register(rest.to_string()),
            "leave" => {
                let status = LeaveStatus::from_str(rest, true)
                    .map_err(|_| format!("Неизвестный статус «{rest}»: work, day-off, request"))?;
                Self::Leave(status.into())
            }
            "return" => Self::Return,
            "back" => Self::Back,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("Неизвестная команда «{other}». {HELP}")),
        };
        Ok(Some(command))
    }
}

pub(crate) async fn run(client: &PresenceClient) -> CliErrorResult<()> {
    let screen = drive(client, client.initialize()).await;
    show(client, &screen);
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };
        debug!("Shell command: {command:?}");

        let screen = match command {
            ShellCommand::Register(name) => drive(client, client.register(&name)).await,
            ShellCommand::Leave(status) => drive(client, client.change_status(status)).await,
            ShellCommand::Return => {
                drive(client, client.change_status(PresenceStatus::Inside)).await
            }
            ShellCommand::Back => drive(client, client.go_back()).await,
            ShellCommand::Status => client.screen().await,
            ShellCommand::Help => {
                println!("{HELP}");
                continue;
            }
            ShellCommand::Quit => break,
        };
        show(client, &screen);
    }

    Ok(())
}
