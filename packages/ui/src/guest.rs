use dioxus::prelude::*;

use crate::{t, use_lang, Header, RsvpSection, Section};

#[component]
pub fn GuestPage() -> Element {
    let lang = use_lang()();

    rsx! {
        Header { show_navigation: true }

        main { class: "guest_page",
            Section { id: "about-us", title: t(lang, "guest_view.us_title"),
                p { {t(lang, "guest_view.sections.us_1")} }
                p { {t(lang, "guest_view.sections.us_2")} }
                p { {t(lang, "guest_view.sections.us_3")} }
            }
            Section { id: "venue", title: t(lang, "guest_view.where_and_when_title"), dark: true,
                p { {t(lang, "guest_view.sections.where_and_when")} }
            }
            Section { id: "accommodation", title: t(lang, "guest_view.accommodation_title"),
                p { {t(lang, "guest_view.sections.accommodation")} }
            }
            Section { id: "menu", title: t(lang, "guest_view.menu_title"), dark: true,
                p { {t(lang, "guest_view.sections.menu")} }
            }
            Section { id: "dress-code", title: t(lang, "guest_view.dress_code_title"),
                p { {t(lang, "guest_view.sections.dress_code")} }
            }
            Section { id: "gifts", title: t(lang, "guest_view.gift_title"), dark: true,
                p { {t(lang, "guest_view.sections.gift_registry")} }
            }
            Section { id: "rsvp", title: t(lang, "guest_view.rsvp_title"),
                RsvpSection {}
            }
        }
    }
}
