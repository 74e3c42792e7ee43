//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Overlays get first refusal on events, top-most first: when the drawer is
//! open every key goes to it; otherwise the cart panel; otherwise the base
//! keymap (`m` menu, `c` cart, `q` quit). Ctrl+C force-quits regardless.
//!
//! ## Dismissal Composition
//!
//! Every drawer activation that should close the drawer does so as an
//! explicit second `update(.., Action::CloseDrawer)` at its match arm, so
//! the close-on-activate contract is visible at each call site instead of
//! hidden in a wrapper. Toggling a submenu is the one activation that keeps
//! the drawer open.

mod component;
mod components;
mod event;
mod ui;

use log::{error, info, warn};
use std::sync::{Arc, mpsc};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::session::{HttpSessionService, OfflineSessionService, SessionService};
use crate::tui::components::{DrawerEvent, NavDrawerState, build_rows};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub drawer: NavDrawerState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            drawer: NavDrawerState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a session service from the resolved config.
pub fn build_service(config: &ResolvedConfig) -> Arc<dyn SessionService> {
    if config.offline {
        Arc::new(OfflineSessionService)
    } else {
        Arc::new(HttpSessionService::new(
            config.session_base_url.clone(),
            config.session_token.clone(),
        ))
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service = build_service(&config);
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Initial session snapshot, fetched off the UI thread
    spawn_session_fetch(service.clone(), tx.clone());

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of which overlay is open
            if matches!(tui_event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // When the drawer is open, route all events to it
            if app.drawer_open {
                let rows = build_rows(&app.menu, &app.expanded, &app.session);
                if let Some(drawer_event) = tui.drawer.handle_event(&tui_event, &rows) {
                    match drawer_event {
                        DrawerEvent::Toggle(label) => {
                            // Toggling keeps the drawer open
                            update(&mut app, Action::ToggleSubmenu(label));
                            let rows = build_rows(&app.menu, &app.expanded, &app.session);
                            tui.drawer.clamp(&rows);
                        }
                        DrawerEvent::Navigate(href) => {
                            update(&mut app, Action::Navigate(href));
                            update(&mut app, Action::CloseDrawer);
                        }
                        DrawerEvent::OpenCart => {
                            update(&mut app, Action::OpenCart);
                            update(&mut app, Action::CloseDrawer);
                        }
                        DrawerEvent::SignOut => {
                            // Fire-and-forget: the drawer closes now, the
                            // backend call resolves (or fails) on its own.
                            if update(&mut app, Action::SignOut) == Effect::SignOut {
                                spawn_sign_out(service.clone(), tx.clone());
                            }
                            update(&mut app, Action::CloseDrawer);
                        }
                        DrawerEvent::Dismiss => {
                            update(&mut app, Action::CloseDrawer);
                        }
                    }
                }
                continue;
            }

            // Cart panel: Esc closes it
            if app.cart_open {
                if matches!(tui_event, TuiEvent::Escape | TuiEvent::InputChar('c')) {
                    update(&mut app, Action::CloseCart);
                }
                continue;
            }

            // Base keymap
            match tui_event {
                TuiEvent::InputChar('m') => {
                    update(&mut app, Action::OpenDrawer);
                }
                TuiEvent::InputChar('c') => {
                    update(&mut app, Action::OpenCart);
                }
                TuiEvent::InputChar('q') | TuiEvent::Escape => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (session fetch, sign-out completion)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }
        // A session change can reshape an open drawer's rows (the signed-in
        // footer has one more entry); keep the selection on a live row.
        if app.drawer_open {
            let rows = build_rows(&app.menu, &app.expanded, &app.session);
            tui.drawer.clamp(&rows);
        }
        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_session_fetch(service: Arc<dyn SessionService>, tx: mpsc::Sender<Action>) {
    info!("Fetching session snapshot via {} backend", service.name());
    tokio::spawn(async move {
        match service.fetch_session().await {
            Ok(view) => {
                if tx.send(Action::SessionLoaded(view)).is_err() {
                    warn!("Failed to deliver session snapshot: receiver dropped");
                }
            }
            Err(e) => {
                // Start signed out with an empty cart; the shell works without
                // a backend.
                warn!("Session fetch failed: {}", e);
            }
        }
    });
}

/// Spawn the sign-out task. Not awaited and never retried: on success the
/// local identity is dropped via `SessionCleared`; on failure the error goes
/// to the diagnostic log and the UI proceeds as if sign-out succeeded.
/// A second activation before the first resolves is possible and unguarded.
fn spawn_sign_out(service: Arc<dyn SessionService>, tx: mpsc::Sender<Action>) {
    info!("Spawning sign-out via {} backend", service.name());
    tokio::spawn(async move {
        match service.sign_out().await {
            Ok(()) => {
                if tx.send(Action::SessionCleared).is_err() {
                    warn!("Failed to deliver sign-out completion: receiver dropped");
                }
            }
            Err(e) => {
                error!("Sign-out failed: {}", e);
            }
        }
    });
}
