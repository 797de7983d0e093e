//! This crate contains all shared UI for the workspace.

mod storage;
pub use storage::{KeyValueStore, LocalStorage, MemoryStorage};

mod i18n;
pub use i18n::{load_lang, resolve, save_lang, set_lang, t, use_lang, I18nProvider, Lang, LANG_STORAGE_KEY};

mod view;
pub use view::{use_view, AppView, CurrentView, ViewProvider, ViewState};

mod nav;
pub use nav::{navigation_links, NavLink};

mod store;
pub use store::{GuestStore, ServerGuestStore, StoreError};

mod rsvp;
pub use rsvp::{
    FormField, PlusOneField, RsvpForm, RsvpSection, SubmitOutcome, SubmitStart, SubmitStatus,
    ERROR_DISPLAY_MS,
};

mod theme;
pub use theme::SiteTheme;

mod toast;
pub use toast::{use_toasts, ToastProvider, Toasts};

mod section;
pub use section::Section;

mod header;
pub use header::Header;

mod login;
pub use login::LoginPage;

mod guest;
pub use guest::GuestPage;

mod dashboard;
pub use dashboard::{capitalize_first, CouplePage};
