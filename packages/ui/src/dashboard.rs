use api::dashboard::summarize;
use api::types::GuestRecord;
use dioxus::prelude::*;

use crate::store::{GuestStore, ServerGuestStore};
use crate::{t, use_lang, use_toasts, Header, Lang};

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// Uppercase the first character, leave the rest alone.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn menu_label(menu_choice: Option<&str>) -> String {
    match menu_choice.map(str::trim) {
        Some(menu) if !menu.is_empty() => capitalize_first(menu),
        _ => "-".to_string(),
    }
}

#[component]
fn StatCard(label: String, value: usize) -> Element {
    rsx! {
        div { class: "stat_card",
            div { class: "stat_value", "{value}" }
            div { class: "stat_label", "{label}" }
        }
    }
}

#[component]
fn GuestRow(lang: Lang, record: GuestRecord) -> Element {
    let plus_ones = record
        .plus_ones
        .iter()
        .map(|p| {
            format!(
                "{} {} ({})",
                capitalize_first(&p.first_name),
                capitalize_first(&p.last_name),
                menu_label(p.menu_choice.as_deref())
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    let attending = if record.attendance {
        t(lang, "general.yes")
    } else {
        t(lang, "general.no")
    };

    rsx! {
        tr {
            td { {capitalize_first(&record.first_name)} }
            td { {capitalize_first(&record.last_name)} }
            td { "{record.email}" }
            td { "{attending}" }
            td { {menu_label(record.menu_choice.as_deref())} }
            td { "{record.dietary_restrictions}" }
            td { if plus_ones.is_empty() { {t(lang, "general.none")} } else { "{plus_ones}" } }
        }
    }
}

/// Couple's view: totals plus one table row per RSVP.
#[component]
pub fn CouplePage() -> Element {
    let lang_signal = use_lang();
    let lang = lang_signal();
    let toasts = use_toasts();
    let mut guests = use_resource(|| async move { ServerGuestStore.list_guests().await });

    // Report each failed load once.
    use_effect(move || {
        if let Some(Err(e)) = &*guests.read() {
            toasts.error(
                t(*lang_signal.peek(), "toast.load_guests_title"),
                Some(e.to_string()),
            );
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }
        Header { show_navigation: false }

        main { class: "dashboard",
            h1 { {t(lang, "couple_view.dashboard_title")} }

            match guests() {
                None => rsx! {
                    p { {t(lang, "general.loading")} }
                },
                Some(Err(_)) => rsx! {
                    p { class: "error", {t(lang, "couple_view.load_failed")} }
                    button { class: "btn", onclick: move |_| guests.restart(), {t(lang, "general.retry")} }
                },
                Some(Ok(records)) => {
                    let totals = summarize(&records);
                    rsx! {
                        div { class: "stat_grid",
                            StatCard { label: t(lang, "couple_view.rsvp_count"), value: totals.rsvps }
                            StatCard { label: t(lang, "couple_view.total_guests"), value: totals.guests }
                            StatCard { label: t(lang, "couple_view.declined"), value: totals.declined }
                            StatCard { label: t(lang, "couple_view.total_regular_meals"), value: totals.meals.regular }
                            StatCard { label: t(lang, "couple_view.total_vegetarian_meals"), value: totals.meals.vegetarian }
                            if totals.meals.other > 0 {
                                StatCard { label: t(lang, "couple_view.other_meals"), value: totals.meals.other }
                            }
                        }

                        if records.is_empty() {
                            p { class: "hint", {t(lang, "couple_view.no_rsvps")} }
                        } else {
                            table { class: "guest_table",
                                thead {
                                    tr {
                                        th { {t(lang, "general.first_name")} }
                                        th { {t(lang, "general.last_name")} }
                                        th { {t(lang, "general.email")} }
                                        th { {t(lang, "couple_view.attending_column")} }
                                        th { {t(lang, "guest_view.rsvp_menu_label")} }
                                        th { {t(lang, "guest_view.rsvp_dietary_restrictions_label")} }
                                        th { {t(lang, "couple_view.plus_one_column")} }
                                    }
                                }
                                tbody {
                                    for record in records.iter() {
                                        GuestRow { key: "{record.id}", lang: lang, record: record.clone() }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
