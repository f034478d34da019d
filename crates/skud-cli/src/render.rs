//! Plain-text rendering of screens and duty officer reports.

use skud_client::{MainView, Notification, Screen};
use skud_core::{AbsentResident, PresenceStats, PresenceStatus, Resident, StatusDisplay};

use std::fmt::Write;

pub(crate) fn screen(screen: &Screen) -> String {
    match screen {
        Screen::Register => "Регистрация\nВведите ФИО: register <ФИО>".to_string(),
        Screen::Main(view) => main_view(view),
        Screen::Confirm(ack) => format!("{ack}\n\n[back] Назад"),
    }
}

fn main_view(view: &MainView) -> String {
    let mut out = format!("👤 {}\n📌 {}", view.full_name, view.status_label);

    if view.leaving_actions_visible {
        for status in [
            PresenceStatus::Work,
            PresenceStatus::DayOff,
            PresenceStatus::Request,
        ] {
            let _ = write!(
                out,
                "\n[leave {}] {}",
                status.as_str().replace('_', "-"),
                StatusDisplay::label(status)
            );
        }
    }
    if view.return_action_visible {
        out.push_str("\n[return] Вернулся");
    }
    if view.is_offline() {
        out.push_str("\n[back] Обновить");
    }

    out
}

pub(crate) fn notification(notification: &Notification) -> String {
    format!("❌ {}", notification.message())
}

pub(crate) fn stats(stats: &PresenceStats) -> String {
    format!(
        "📊 Сводка по личному составу:\n\n\
         ✅ На месте: {inside} чел.\n\
         ❌ Отсутствуют: {absent} чел.\n\
         \x20   {work_label}: {work}\n\
         \x20   {day_off_label}: {day_off}\n\
         \x20   {request_label}: {request}\n\n\
         👥 Всего в базе: {total} чел.",
        inside = stats.inside,
        absent = stats.absent_total(),
        work_label = StatusDisplay::label(PresenceStatus::Work),
        work = stats.work,
        day_off_label = StatusDisplay::label(PresenceStatus::DayOff),
        day_off = stats.day_off,
        request_label = StatusDisplay::label(PresenceStatus::Request),
        request = stats.request,
        total = stats.total,
    )
}

pub(crate) fn absent(absent: &[AbsentResident]) -> String {
    if absent.is_empty() {
        return "✅ Все на месте! Отсутствующих нет.".to_string();
    }

    let mut out = String::from("📋 Список отсутствующих:\n");
    for (i, resident) in absent.iter().enumerate() {
        let gps = if resident.has_location { " 📍" } else { "" };
        let _ = write!(
            out,
            "\n{}. {} ({}){gps}",
            i + 1,
            resident.full_name,
            resident.status_label
        );
    }
    let _ = write!(out, "\n\nВсего: {} чел.", absent.len());
    out
}

pub(crate) fn locations(absent: &[AbsentResident]) -> String {
    let located: Vec<_> = absent
        .iter()
        .filter_map(|r| r.coordinates().map(|c| (r, c)))
        .collect();

    if located.is_empty() {
        return "📍 Нет данных о местоположении.".to_string();
    }

    let mut out = format!("📍 Местоположение отсутствующих ({} чел. с GPS):", located.len());
    for (resident, coordinates) in located {
        let _ = write!(
            out,
            "\n\n👤 {}\n📌 {}\n{}\n{}",
            resident.full_name,
            resident.status_label,
            coordinates,
            coordinates.maps_url()
        );
    }
    out
}

pub(crate) fn users(users: &[Resident], query: Option<&str>) -> String {
    if users.is_empty() {
        return match query {
            Some(q) => format!("🔍 По запросу «{q}» ничего не найдено."),
            None => "Пользователей нет.".to_string(),
        };
    }

    let mut out = match query {
        Some(_) => format!("🔍 Найдено {} пользователей:", users.len()),
        None => format!("👥 Пользователей: {}", users.len()),
    };
    for user in users {
        let _ = write!(
            out,
            "\n#{} {} ({})",
            user.id, user.full_name, user.status_label
        );
    }
    out
}
