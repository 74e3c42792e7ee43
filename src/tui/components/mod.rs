//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: Top bar showing wordmark, route, cart count, status
//! - `Page`: Content area for the current route
//! - `CartPanel`: Cart overlay showing the snapshot's item count
//!
//! ### Stateful Overlays (Event-Driven)
//!
//! Overlays that manage local presentation state and emit events, following
//! the persistent state + transient wrapper split:
//! - `NavDrawer` / `NavDrawerState`: the slide-out navigation drawer
//!
//! ## Design Philosophy
//!
//! Components receive external data as props, not by reaching into global
//! state — dependencies stay explicit and each component is testable against
//! `ratatui::backend::TestBackend` in isolation. Each component file contains
//! its state types, event types, rendering logic, and tests.

pub mod cart_panel;
pub mod nav_drawer;
pub mod page;
mod title_bar;

pub use cart_panel::CartPanel;
pub use nav_drawer::{DrawerEvent, NavDrawer, NavDrawerState, build_rows};
pub use page::Page;
pub use title_bar::TitleBar;
