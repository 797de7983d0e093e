use dioxus::prelude::*;

use crate::nav::navigation_links;
use crate::{set_lang, t, use_lang, use_view, Lang};

#[component]
fn LangButton(option: Lang) -> Element {
    let lang = use_lang();
    rsx! {
        button {
            class: if lang() == option { "lang_option active" } else { "lang_option" },
            onclick: move |_| set_lang(lang, option),
            "{option.switch_label()}"
        }
    }
}

#[component]
fn LangSwitch() -> Element {
    rsx! {
        div { class: "lang_switch",
            LangButton { option: Lang::It }
            span { class: "lang_sep", "|" }
            LangButton { option: Lang::En }
        }
    }
}

/// Top bar shown on the guest site and the dashboard. The section links and
/// mobile drawer are only rendered when `show_navigation` is set.
#[component]
pub fn Header(show_navigation: bool) -> Element {
    let lang = use_lang()();
    let mut view = use_view();
    let menu_open = view().menu_open;
    let links = navigation_links(lang);

    rsx! {
        header { class: "site_header",
            button {
                class: "back_button",
                onclick: move |_| view.write().go_back(),
                {format!("← {}", t(lang, "header.back"))}
            }

            if show_navigation {
                nav { class: "nav_links",
                    for link in links.iter() {
                        a {
                            key: "{link.section_id}",
                            class: "nav_link",
                            href: "#{link.section_id}",
                            "{link.label}"
                        }
                    }
                }
            }

            LangSwitch {}

            if show_navigation {
                button {
                    class: "hamburger",
                    "aria-expanded": "{menu_open}",
                    "aria-label": if menu_open { t(lang, "header.close_menu") } else { t(lang, "header.open_menu") },
                    onclick: move |_| view.write().toggle_menu(),
                    if menu_open { "✕" } else { "☰" }
                }
            }
        }

        if show_navigation && menu_open {
            aside { class: "sidebar",
                for link in links.iter() {
                    a {
                        key: "{link.section_id}",
                        class: "sidebar_link",
                        href: "#{link.section_id}",
                        onclick: move |_| view.write().close_menu(),
                        "{link.label}"
                    }
                }
            }
        }
    }
}
