use crate::admin_commands::AdminCommands;
use crate::error::Result as CliErrorResult;
use crate::render;

use std::process::ExitCode;

use log::info;
use serde::Serialize;
use skud_client::ApiClient;

/// Run a duty officer command and print its result.
pub(crate) async fn run(
    api: &ApiClient,
    action: AdminCommands,
    pretty: bool,
) -> CliErrorResult<ExitCode> {
    let output = match action {
        AdminCommands::Stats => {
            let stats = api.stats().await?;
            format_output(&stats, pretty, || render::stats(&stats))?
        }
        AdminCommands::Absent => {
            let absent = api.absent().await?;
            format_output(&absent, pretty, || render::absent(&absent))?
        }
        AdminCommands::Locations => {
            let absent = api.absent().await?;
            let located: Vec<_> = absent.into_iter().filter(|r| r.has_location).collect();
            format_output(&located, pretty, || render::locations(&located))?
        }
        AdminCommands::Users => {
            let users = api.list_users().await?;
            format_output(&users, pretty, || render::users(&users, None))?
        }
        AdminCommands::Search { query } => {
            let users = api.search_users(&query).await?;
            format_output(&users, pretty, || render::users(&users, Some(query.trim())))?
        }
        AdminCommands::Delete { id } => {
            let result = api.delete_user(id).await?;
            info!("Deleted resident #{id}");
            format_output(&result, pretty, || format!("✅ {}", result.message))?
        }
        AdminCommands::Reset { yes } => {
            if !yes {
                eprintln!("Сброс переведёт всех жильцов в статус «В здании».");
                eprintln!("Повторите команду с --yes для подтверждения.");
                return Ok(ExitCode::FAILURE);
            }
            let result = api.reset_all().await?;
            format_output(&result, pretty, || format!("✅ {}", result.message))?
        }
    };

    println!("{output}");
    Ok(ExitCode::SUCCESS)
}

fn format_output<T, F>(value: &T, pretty: bool, text: F) -> CliErrorResult<String>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text())
    }
}
