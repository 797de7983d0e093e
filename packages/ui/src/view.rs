use api::types::Role;
use dioxus::prelude::*;

/// Top-level screens. Exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Login,
    Guest,
    Couple,
}

impl From<Role> for AppView {
    fn from(role: Role) -> Self {
        match role {
            Role::Guest => AppView::Guest,
            Role::Couple => AppView::Couple,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub view: AppView,
    /// Mobile navigation drawer.
    pub menu_open: bool,
}

impl ViewState {
    pub fn enter(&mut self, role: Role) {
        self.view = role.into();
        self.menu_open = false;
    }

    pub fn go_back(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[component]
pub fn ViewProvider(children: Element) -> Element {
    let state = use_signal(ViewState::default);
    use_context_provider(|| state);
    rsx! { {children} }
}

pub fn use_view() -> Signal<ViewState> {
    use_context::<Signal<ViewState>>()
}

/// Mounts the screen selected by the view state.
#[component]
pub fn CurrentView() -> Element {
    let state = use_view();
    match state().view {
        AppView::Login => rsx! { crate::LoginPage {} },
        AppView::Guest => rsx! { crate::GuestPage {} },
        AppView::Couple => rsx! { crate::CouplePage {} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_login() {
        assert_eq!(ViewState::default().view, AppView::Login);
    }

    #[test]
    fn role_selection_switches_view() {
        let mut state = ViewState::default();
        state.enter(Role::Guest);
        assert_eq!(state.view, AppView::Guest);

        let mut state = ViewState::default();
        state.enter(Role::Couple);
        assert_eq!(state.view, AppView::Couple);
    }

    #[test]
    fn go_back_always_returns_to_login() {
        for role in [Role::Guest, Role::Couple] {
            let mut state = ViewState::default();
            state.enter(role);
            state.toggle_menu();
            state.go_back();
            assert_eq!(state, ViewState::default());
        }
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut state = ViewState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
        state.toggle_menu();
        state.close_menu();
        assert!(!state.menu_open);
    }
}
