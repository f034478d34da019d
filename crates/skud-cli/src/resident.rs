use crate::render;

use std::future::Future;
use std::process::ExitCode;

use log::info;
use skud_client::{PresenceClient, Screen};
use skud_core::PresenceStatus;

const ALREADY_REGISTERED: &str = "Устройство уже зарегистрировано";
const ACTION_UNAVAILABLE: &str = "Действие недоступно на этом экране";

/// Await a client operation, turning Ctrl-C into a cancellation.
pub(crate) async fn drive<F>(client: &PresenceClient, operation: F) -> Screen
where
    F: Future<Output = Screen>,
{
    tokio::pin!(operation);
    tokio::select! {
        screen = &mut operation => screen,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, cancelling the running operation");
            client.cancel();
            operation.await
        }
    }
}

/// Print the screen and any pending notification.
///
/// Returns `false` when a notification was shown; every notification the
/// client raises reports a failed operation.
pub(crate) fn show(client: &PresenceClient, screen: &Screen) -> bool {
    println!("{}", render::screen(screen));
    match client.notification() {
        Some(notification) => {
            eprintln!("{}", render::notification(&notification));
            false
        }
        None => true,
    }
}

pub(crate) fn exit_code(succeeded: bool) -> ExitCode {
    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Initialize and print the first screen.
pub(crate) async fn show_current(client: &PresenceClient) -> bool {
    let screen = drive(client, client.initialize()).await;
    show(client, &screen)
}

/// Register, if the device is on the registration screen after start-up.
pub(crate) async fn register(client: &PresenceClient, full_name: &str) -> bool {
    let Some(screen) = start(client).await else {
        return false;
    };
    if !matches!(screen, Screen::Register) {
        return refuse(client, &screen, ALREADY_REGISTERED);
    }

    let screen = drive(client, client.register(full_name)).await;
    show(client, &screen)
}

/// Report `status`, if the main screen offers it after start-up.
pub(crate) async fn change_status(client: &PresenceClient, status: PresenceStatus) -> bool {
    let Some(screen) = start(client).await else {
        return false;
    };
    if !screen.main_view().is_some_and(|view| view.offers(status)) {
        return refuse(client, &screen, ACTION_UNAVAILABLE);
    }

    let screen = drive(client, client.change_status(status)).await;
    show(client, &screen)
}

/// Initialize; on failure the screen and notification are already printed.
async fn start(client: &PresenceClient) -> Option<Screen> {
    let screen = drive(client, client.initialize()).await;
    if client.notification().is_some() {
        show(client, &screen);
        return None;
    }
    Some(screen)
}

fn refuse(client: &PresenceClient, screen: &Screen, message: &str) -> bool {
    show(client, screen);
    eprintln!("{message}");
    false
}
