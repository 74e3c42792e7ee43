//! # Application State
//!
//! Core business state for the storefront shell. This module contains domain
//! logic only - no TUI-specific types. Presentation state (list selection,
//! scroll position) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── shop_name: String            // wordmark in the drawer header
//! ├── menu: Vec<MenuItem>          // immutable nav tree, injected at construction
//! ├── expanded: HashSet<String>    // expansion set: parent labels currently open
//! ├── drawer_open: bool            // slide-out drawer visibility
//! ├── cart_open: bool              // cart panel visibility
//! ├── router: Router               // current route + history
//! ├── session: SessionView         // externally-owned cart/auth snapshot
//! └── status_message: String       // status bar text
//! ```
//!
//! The expansion set is the sole source of truth for which submenus render
//! open. It starts empty, is mutated only by `Action::ToggleSubmenu`, and
//! survives drawer close — only process exit resets it.
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::collections::HashSet;

use crate::core::config::ResolvedConfig;
use crate::core::menu::MenuItem;
use crate::core::router::Router;
use crate::session::SessionView;

pub struct App {
    pub shop_name: String,
    pub menu: Vec<MenuItem>,
    pub expanded: HashSet<String>,
    pub drawer_open: bool,
    pub cart_open: bool,
    pub router: Router,
    pub session: SessionView,
    pub status_message: String,
}

impl App {
    pub fn new(shop_name: String, menu: Vec<MenuItem>) -> Self {
        Self {
            shop_name,
            menu,
            expanded: HashSet::new(),
            drawer_open: false,
            cart_open: false,
            router: Router::new(),
            session: SessionView::default(),
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.shop_name.clone(), config.menu.clone())
    }

    /// Whether the submenu for `label` currently renders open.
    pub fn is_expanded(&self, label: &str) -> bool {
        self.expanded.contains(label)
    }
}
