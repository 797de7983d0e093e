use crate::{t, Lang};

/// One entry of the guest-site navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub section_id: &'static str,
}

/// Section ids in page order with the header key that labels each.
pub const NAV_SECTIONS: [(&str, &str); 7] = [
    ("about-us", "header.about_us"),
    ("venue", "header.location"),
    ("accommodation", "header.accommodation"),
    ("menu", "header.food"),
    ("dress-code", "header.dress_code"),
    ("gifts", "header.gifts"),
    ("rsvp", "header.rsvp"),
];

pub fn navigation_links(lang: Lang) -> Vec<NavLink> {
    NAV_SECTIONS
        .iter()
        .map(|&(section_id, key)| NavLink {
            label: t(lang, key),
            section_id,
        })
        .collect()
}
