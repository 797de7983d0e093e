mod form;

pub use form::{
    FormField, PlusOneField, RsvpForm, SubmitOutcome, SubmitStart, SubmitStatus, ERROR_DISPLAY_MS,
};

use api::types::{MenuChoice, MAX_PLUS_ONES};
use api::validation::FieldId;
use dioxus::prelude::*;
use std::time::Duration;

use crate::store::{GuestStore, ServerGuestStore};
use crate::{t, Lang};

const RSVP_CSS: Asset = asset!("/assets/styling/rsvp.css");

fn error_text(form: &RsvpForm, lang: Lang, field: FieldId) -> Option<String> {
    form.errors()
        .get(field)
        .map(|error| t(lang, error.message_key(field)))
}

fn menu_value(menu: Option<MenuChoice>) -> &'static str {
    menu.map(|m| m.as_db()).unwrap_or("")
}

fn attendance_value(attendance: Option<bool>) -> &'static str {
    match attendance {
        Some(true) => "yes",
        Some(false) => "no",
        None => "",
    }
}

fn field_error(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "field_error", role: "alert", "{message}" }
        }
    }
}

#[component]
pub fn RsvpSection() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let mut form = use_signal(RsvpForm::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let start = form.write().begin_submit();
        match start {
            SubmitStart::Busy => {}
            SubmitStart::Invalid { generation } => {
                tracing::debug!("rsvp: {} invalid fields", form.peek().errors().len());
                spawn(async move {
                    gloo_timers::future::sleep(Duration::from_millis(ERROR_DISPLAY_MS.into())).await;
                    form.write().expire_errors(generation);
                });
            }
            SubmitStart::Send(rsvp) => {
                spawn(async move {
                    let result = ServerGuestStore.insert_guest(rsvp).await;
                    match &result {
                        Ok(_) => toasts.success(t(lang, "toast.rsvp_sent_title"), None),
                        Err(e) => toasts.error(
                            t(lang, "toast.submit_failed_title"),
                            Some(format!("{} {e}", t(lang, "toast.details"))),
                        ),
                    }
                    form.write().finish_submit(result);
                });
            }
        }
    };

    let state = form();
    let rsvp = state.rsvp().clone();
    let attending = rsvp.attendance == Some(true);
    let submitting = state.status() == SubmitStatus::Submitting;

    if state.status() == SubmitStatus::Submitted {
        return rsx! {
            document::Link { rel: "stylesheet", href: RSVP_CSS }
            p { class: "rsvp_done", {t(lang, "guest_view.submitted")} }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: RSVP_CSS }

        form { class: "rsvp_form", novalidate: true, onsubmit: onsubmit,
            div { class: "rsvp_row",
                label { r#for: "firstName", {t(lang, "guest_view.rsvp_name_label")} }
                input {
                    id: "firstName",
                    value: "{rsvp.first_name}",
                    oninput: move |e| form.write().set_field(FormField::FirstName, &e.value()),
                }
                {field_error(error_text(&state, lang, FieldId::FirstName))}
            }
            div { class: "rsvp_row",
                label { r#for: "lastName", {t(lang, "guest_view.rsvp_lastname_label")} }
                input {
                    id: "lastName",
                    value: "{rsvp.last_name}",
                    oninput: move |e| form.write().set_field(FormField::LastName, &e.value()),
                }
                {field_error(error_text(&state, lang, FieldId::LastName))}
            }
            div { class: "rsvp_row",
                label { r#for: "email", {t(lang, "guest_view.rsvp_email_label")} }
                input {
                    id: "email",
                    r#type: "email",
                    value: "{rsvp.email}",
                    oninput: move |e| form.write().set_field(FormField::Email, &e.value()),
                }
                {field_error(error_text(&state, lang, FieldId::Email))}
            }
            div { class: "rsvp_row",
                label { r#for: "attendance", {t(lang, "guest_view.rsvp_attending_label")} }
                select {
                    id: "attendance",
                    value: attendance_value(rsvp.attendance),
                    onchange: move |e| form.write().set_field(FormField::Attendance, &e.value()),
                    option { value: "", {t(lang, "guest_view.rsvp_selection")} }
                    option { value: "yes", {t(lang, "guest_view.yes")} }
                    option { value: "no", {t(lang, "guest_view.no")} }
                }
                {field_error(error_text(&state, lang, FieldId::Attendance))}
            }

            if attending {
                div { class: "rsvp_row",
                    label { r#for: "menu", {t(lang, "guest_view.rsvp_menu_label")} }
                    select {
                        id: "menu",
                        value: menu_value(rsvp.menu),
                        onchange: move |e| form.write().set_field(FormField::Menu, &e.value()),
                        option { value: "", {t(lang, "guest_view.rsvp_selection")} }
                        option { value: "regular", {t(lang, "guest_view.rsvp_regular_label")} }
                        option { value: "vegetarian", {t(lang, "guest_view.rsvp_vegetarian_label")} }
                    }
                    {field_error(error_text(&state, lang, FieldId::Menu))}
                }
                div { class: "rsvp_row",
                    label { r#for: "dietaryRestrictions", {t(lang, "guest_view.rsvp_dietary_restrictions_label")} }
                    textarea {
                        id: "dietaryRestrictions",
                        rows: 2,
                        value: "{rsvp.dietary_restrictions}",
                        oninput: move |e| form.write().set_field(FormField::DietaryRestrictions, &e.value()),
                    }
                }
                div { class: "rsvp_row",
                    label { r#for: "plusOneCount", {t(lang, "guest_view.rsvp_plus_one_label")} }
                    select {
                        id: "plusOneCount",
                        value: "{rsvp.plus_ones.len()}",
                        onchange: move |e| {
                            let count = e.value().parse::<usize>().unwrap_or(0);
                            form.write().set_plus_one_count(count);
                        },
                        for n in 0..=MAX_PLUS_ONES {
                            option { key: "{n}", value: "{n}",
                                if n == 0 {
                                    {t(lang, "guest_view.rsvp_selection_none")}
                                } else {
                                    "{n}"
                                }
                            }
                        }
                    }
                }

                for (idx, plus_one) in rsvp.plus_ones.iter().enumerate() {
                    fieldset { key: "{idx}", class: "plus_one",
                        legend { {format!("{} {}", t(lang, "guest_view.rsvp_plus_one_label"), idx + 1)} }
                        div { class: "rsvp_row",
                            label { r#for: "plusOneFirstName{idx}", {t(lang, "guest_view.rsvp_name_label")} }
                            input {
                                id: "plusOneFirstName{idx}",
                                value: "{plus_one.first_name}",
                                oninput: move |e| form.write().set_plus_one_field(idx, PlusOneField::FirstName, &e.value()),
                            }
                            {field_error(error_text(&state, lang, FieldId::PlusOneFirstName(idx)))}
                        }
                        div { class: "rsvp_row",
                            label { r#for: "plusOneLastName{idx}", {t(lang, "guest_view.rsvp_lastname_label")} }
                            input {
                                id: "plusOneLastName{idx}",
                                value: "{plus_one.last_name}",
                                oninput: move |e| form.write().set_plus_one_field(idx, PlusOneField::LastName, &e.value()),
                            }
                            {field_error(error_text(&state, lang, FieldId::PlusOneLastName(idx)))}
                        }
                        div { class: "rsvp_row",
                            label { r#for: "plusOneMenu{idx}", {t(lang, "guest_view.rsvp_menu_label")} }
                            select {
                                id: "plusOneMenu{idx}",
                                value: menu_value(plus_one.menu),
                                onchange: move |e| form.write().set_plus_one_field(idx, PlusOneField::Menu, &e.value()),
                                option { value: "", {t(lang, "guest_view.rsvp_selection")} }
                                option { value: "regular", {t(lang, "guest_view.rsvp_regular_label")} }
                                option { value: "vegetarian", {t(lang, "guest_view.rsvp_vegetarian_label")} }
                            }
                            {field_error(error_text(&state, lang, FieldId::PlusOneMenu(idx)))}
                        }
                        div { class: "rsvp_row",
                            label { r#for: "plusOneDietaryRestrictions{idx}", {t(lang, "guest_view.rsvp_dietary_restrictions_label")} }
                            input {
                                id: "plusOneDietaryRestrictions{idx}",
                                value: "{plus_one.dietary_restrictions}",
                                oninput: move |e| form.write().set_plus_one_field(idx, PlusOneField::DietaryRestrictions, &e.value()),
                            }
                        }
                    }
                }
            }

            if state.submit_error().is_some() {
                p { class: "error", role: "alert", {t(lang, "guest_view.submit_failed")} }
            }

            button {
                class: "btn primary",
                r#type: "submit",
                disabled: submitting,
                if submitting {
                    {t(lang, "guest_view.submitting")}
                } else {
                    {t(lang, "guest_view.submit_rsvp")}
                }
            }
        }
    }
}
