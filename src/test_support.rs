//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::menu::{MenuItem, MenuLink};
use crate::core::state::App;
use crate::session::{SessionError, SessionService, SessionView};

/// A small injected menu: two parents and a leaf, nothing like the stock
/// tree, so tests prove the drawer has no hard-coded menu knowledge.
pub fn test_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::leaf("Home", "/"),
        MenuItem::parent(
            "Categories",
            vec![
                MenuLink::new("Protein", "/products?category=protein"),
                MenuLink::new("Creatine", "/products?category=creatine"),
            ],
        ),
        MenuItem::parent(
            "Brands",
            vec![MenuLink::new("House Brand", "/products?brand=house")],
        ),
    ]
}

/// Creates a test App with the small injected menu.
pub fn test_app() -> App {
    App::new("Test Shop".to_string(), test_menu())
}

/// A session service that always fails, for exercising the sign-out
/// error path without a server.
pub struct FailingSessionService;

#[async_trait]
impl SessionService for FailingSessionService {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_session(&self) -> Result<SessionView, SessionError> {
        Err(SessionError::Network("no backend".to_string()))
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        Err(SessionError::Api {
            status: 500,
            message: "boom".to_string(),
        })
    }
}
