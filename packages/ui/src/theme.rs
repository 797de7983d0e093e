use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
const SITE_CSS: Asset = asset!("/assets/styling/site.css");

#[component]
pub fn SiteTheme() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: SITE_CSS }
    }
}
