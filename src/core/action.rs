//! # Actions
//!
//! Everything that can happen in the shell becomes an `Action`.
//! User activates a menu link? That's `Action::Navigate(href)`.
//! The session backend responds? That's `Action::SessionLoaded(view)`.
//!
//! The `update()` function takes the current state and an action and mutates
//! the state. No side effects here. I/O happens elsewhere: `update` returns
//! an `Effect` and the event loop performs it (spawning the sign-out task,
//! quitting).
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Dismissal composition: activating any navigational or footer control
//! closes the drawer, but `update` never closes it implicitly. Each call
//! site runs the control's own action and then `Action::CloseDrawer` as a
//! second, visible step, so the dismissal contract is readable where the
//! control is handled rather than buried in a wrapper.

use log::debug;

use crate::core::state::App;
use crate::session::SessionView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Trigger activated: show the drawer.
    OpenDrawer,
    /// Hide the drawer. Expansion state is left untouched.
    CloseDrawer,
    /// Flip the expansion state of one parent label. Labels that match no
    /// parent entry are inert: they never correspond to a rendered toggle.
    ToggleSubmenu(String),
    /// Navigate to a literal path, recording a history entry.
    Navigate(String),
    /// Show the cart panel.
    OpenCart,
    /// Hide the cart panel.
    CloseCart,
    /// User activated the sign-out control.
    SignOut,
    /// Session snapshot arrived from the backend.
    SessionLoaded(SessionView),
    /// Sign-out resolved on the backend; drop the local identity.
    SessionCleared,
    Quit,
}

/// What the event loop must do after an `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the fire-and-forget sign-out task.
    SignOut,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::OpenDrawer => {
            app.drawer_open = true;
            Effect::None
        }
        Action::CloseDrawer => {
            app.drawer_open = false;
            Effect::None
        }
        Action::ToggleSubmenu(label) => {
            if !app.expanded.remove(&label) {
                app.expanded.insert(label);
            }
            Effect::None
        }
        Action::Navigate(path) => {
            app.router.navigate(&path);
            app.status_message = String::new();
            Effect::None
        }
        Action::OpenCart => {
            app.cart_open = true;
            Effect::None
        }
        Action::CloseCart => {
            app.cart_open = false;
            Effect::None
        }
        Action::SignOut => Effect::SignOut,
        Action::SessionLoaded(view) => {
            app.session = view;
            Effect::None
        }
        Action::SessionCleared => {
            app.session.user = None;
            app.status_message = String::from("Signed out");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserIdentity;
    use crate::test_support::test_app;

    #[test]
    fn test_toggle_parity() {
        // Membership after n toggles of the same label == (n mod 2 == 1).
        let mut app = test_app();
        for n in 1..=5 {
            update(&mut app, Action::ToggleSubmenu("Categories".to_string()));
            assert_eq!(app.is_expanded("Categories"), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_toggle_does_not_affect_other_labels() {
        let mut app = test_app();
        update(&mut app, Action::ToggleSubmenu("Categories".to_string()));
        update(&mut app, Action::ToggleSubmenu("Brands".to_string()));
        assert!(app.is_expanded("Categories"));
        assert!(app.is_expanded("Brands"));

        update(&mut app, Action::ToggleSubmenu("Brands".to_string()));
        assert!(app.is_expanded("Categories"));
        assert!(!app.is_expanded("Brands"));
    }

    #[test]
    fn test_multiple_submenus_expand_simultaneously() {
        // No accordion exclusivity.
        let mut app = test_app();
        update(&mut app, Action::ToggleSubmenu("Categories".to_string()));
        update(&mut app, Action::ToggleSubmenu("Brands".to_string()));
        assert_eq!(app.expanded.len(), 2);
    }

    #[test]
    fn test_mismatched_label_is_inert() {
        // A label matching no parent entry still enters the set, but since it
        // never matches a rendered toggle control nothing expands.
        let mut app = test_app();
        update(&mut app, Action::ToggleSubmenu("No Such Menu".to_string()));
        assert!(app.is_expanded("No Such Menu"));
        assert!(!app.menu.iter().any(|m| m.label == "No Such Menu"));
    }

    #[test]
    fn test_expansion_survives_drawer_close() {
        let mut app = test_app();
        update(&mut app, Action::OpenDrawer);
        update(&mut app, Action::ToggleSubmenu("Categories".to_string()));
        update(&mut app, Action::CloseDrawer);
        assert!(!app.drawer_open);
        assert!(app.is_expanded("Categories"));

        update(&mut app, Action::OpenDrawer);
        assert!(app.is_expanded("Categories"));
    }

    #[test]
    fn test_navigate_records_history() {
        let mut app = test_app();
        update(&mut app, Action::Navigate("/products".to_string()));
        assert_eq!(app.router.current(), "/products");
        assert_eq!(app.router.history().len(), 2);
    }

    #[test]
    fn test_activation_composes_with_close() {
        // The call-site composition: action then CloseDrawer, as two updates.
        let mut app = test_app();
        update(&mut app, Action::OpenDrawer);
        update(&mut app, Action::Navigate("/track-order".to_string()));
        update(&mut app, Action::CloseDrawer);
        assert!(!app.drawer_open);
        assert_eq!(app.router.current(), "/track-order");
    }

    #[test]
    fn test_open_cart_then_close_drawer() {
        let mut app = test_app();
        update(&mut app, Action::OpenDrawer);
        update(&mut app, Action::OpenCart);
        update(&mut app, Action::CloseDrawer);
        assert!(app.cart_open);
        assert!(!app.drawer_open);
    }

    #[test]
    fn test_sign_out_returns_effect_and_leaves_user() {
        // The reducer only requests the effect; the identity is dropped later
        // by SessionCleared when (and if) the backend call resolves.
        let mut app = test_app();
        app.session.user = Some(UserIdentity {
            email: "gym@rat.example".to_string(),
            token: "tok".to_string(),
        });

        let effect = update(&mut app, Action::SignOut);
        assert_eq!(effect, Effect::SignOut);
        assert!(app.session.is_authenticated());

        update(&mut app, Action::SessionCleared);
        assert!(!app.session.is_authenticated());
        assert_eq!(app.status_message, "Signed out");
    }

    #[test]
    fn test_session_loaded_replaces_view() {
        let mut app = test_app();
        let view = SessionView {
            cart_count: 3,
            user: Some(UserIdentity {
                email: "a@b.c".to_string(),
                token: String::new(),
            }),
        };
        update(&mut app, Action::SessionLoaded(view.clone()));
        assert_eq!(app.session, view);
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
