use dioxus::prelude::*;

/// A titled block of the guest site, addressable by `#id` from the header.
#[component]
pub fn Section(id: String, title: String, #[props(default)] dark: bool, children: Element) -> Element {
    rsx! {
        section {
            id: "{id}",
            class: if dark { "site_section dark" } else { "site_section" },
            h2 { class: "section_title", "{title}" }
            div { class: "section_body", {children} }
        }
    }
}
