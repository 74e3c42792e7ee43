//! # Navigation Drawer Component
//!
//! The slide-in panel holding the menu tree and the session-aware footer.
//! Opened with `m`, dismissed with Esc; activating any link or footer action
//! also closes it (the event loop composes the action with `CloseDrawer`).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `NavDrawerState` lives in `TuiState` (selection survives redraws)
//! - `NavDrawer` is created each frame with borrowed state
//!
//! The drawer itself owns no menu or session data. Each frame (and each
//! event) the caller flattens `App.menu` + the expansion set + the session
//! snapshot into a row list via [`build_rows`], so the rendered rows can
//! never drift from core state.

use std::collections::HashSet;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::core::menu::MenuItem;
use crate::session::SessionView;
use crate::tui::event::TuiEvent;

pub const ACCOUNT_ROUTE: &str = "/account";
pub const AUTH_ROUTE: &str = "/auth";
pub const TRACK_ORDER_ROUTE: &str = "/track-order";
pub const CONTACT_ROUTE: &str = "/contact";

/// One activatable (or divider) line in the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerRow {
    /// Top-level leaf entry, directly navigable.
    Link { label: String, href: String },
    /// Top-level parent entry; activating flips its submenu.
    Toggle { label: String, expanded: bool },
    /// Entry of an expanded submenu.
    SubLink { label: String, href: String },
    /// Visual separator between the menu tree and the footer. Not selectable.
    Divider,
    Cart { count: u32 },
    Account,
    SignOut,
    SignIn,
    TrackOrder,
    ContactUs,
}

impl DrawerRow {
    fn selectable(&self) -> bool {
        !matches!(self, DrawerRow::Divider)
    }
}

/// Events emitted by the drawer. The event loop maps these onto core actions
/// and appends the explicit `CloseDrawer` step where the contract demands it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerEvent {
    Toggle(String),
    Navigate(String),
    OpenCart,
    SignOut,
    Dismiss,
}

/// Flatten the menu tree, expansion set, and session snapshot into rows.
///
/// Menu rows come first in tree order, with submenu entries inserted under
/// their parent only while that parent's label is in the expansion set. The
/// footer block is fixed and independent of menu data: cart, identity
/// (account + sign-out when authenticated, sign-in otherwise), track order,
/// contact.
pub fn build_rows(
    menu: &[MenuItem],
    expanded: &HashSet<String>,
    session: &SessionView,
) -> Vec<DrawerRow> {
    let mut rows = Vec::new();

    for item in menu {
        match &item.submenu {
            Some(submenu) => {
                let is_expanded = expanded.contains(&item.label);
                rows.push(DrawerRow::Toggle {
                    label: item.label.clone(),
                    expanded: is_expanded,
                });
                if is_expanded {
                    for link in submenu {
                        rows.push(DrawerRow::SubLink {
                            label: link.label.clone(),
                            href: link.href.clone(),
                        });
                    }
                }
            }
            None => rows.push(DrawerRow::Link {
                label: item.label.clone(),
                href: item.href.clone(),
            }),
        }
    }

    rows.push(DrawerRow::Divider);
    rows.push(DrawerRow::Cart {
        count: session.cart_count,
    });
    if session.is_authenticated() {
        rows.push(DrawerRow::Account);
        rows.push(DrawerRow::SignOut);
    } else {
        rows.push(DrawerRow::SignIn);
    }
    rows.push(DrawerRow::TrackOrder);
    rows.push(DrawerRow::ContactUs);

    rows
}

/// Persistent state for the drawer overlay.
pub struct NavDrawerState {
    pub selected: usize,
    pub list_state: ListState,
}

impl NavDrawerState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    /// Handle a key event against the current row list, returning a
    /// DrawerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent, rows: &[DrawerRow]) -> Option<DrawerEvent> {
        match event {
            TuiEvent::Escape => Some(DrawerEvent::Dismiss),
            TuiEvent::CursorUp => {
                let mut idx = self.selected.saturating_sub(1);
                // Skip backwards past non-selectable rows
                while idx > 0 && !rows.get(idx).is_some_and(DrawerRow::selectable) {
                    idx -= 1;
                }
                if rows.get(idx).is_some_and(DrawerRow::selectable) {
                    self.selected = idx;
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                let mut idx = self.selected + 1;
                // Skip forwards past non-selectable rows
                while idx < rows.len() && !rows[idx].selectable() {
                    idx += 1;
                }
                if idx < rows.len() {
                    self.selected = idx;
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => rows.get(self.selected).and_then(Self::activate),
            _ => None,
        }
    }

    /// Map an activated row to its event. Parent rows toggle; everything
    /// else navigates or invokes a session mutator.
    fn activate(row: &DrawerRow) -> Option<DrawerEvent> {
        match row {
            DrawerRow::Link { href, .. } | DrawerRow::SubLink { href, .. } => {
                Some(DrawerEvent::Navigate(href.clone()))
            }
            DrawerRow::Toggle { label, .. } => Some(DrawerEvent::Toggle(label.clone())),
            DrawerRow::Cart { .. } => Some(DrawerEvent::OpenCart),
            DrawerRow::Account => Some(DrawerEvent::Navigate(ACCOUNT_ROUTE.to_string())),
            DrawerRow::SignOut => Some(DrawerEvent::SignOut),
            DrawerRow::SignIn => Some(DrawerEvent::Navigate(AUTH_ROUTE.to_string())),
            DrawerRow::TrackOrder => Some(DrawerEvent::Navigate(TRACK_ORDER_ROUTE.to_string())),
            DrawerRow::ContactUs => Some(DrawerEvent::Navigate(CONTACT_ROUTE.to_string())),
            DrawerRow::Divider => None,
        }
    }

    /// Re-clamp the selection after the row list changed shape (collapsing a
    /// submenu can shrink it past the old selection).
    pub fn clamp(&mut self, rows: &[DrawerRow]) {
        if rows.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        let mut idx = self.selected.min(rows.len() - 1);
        while idx > 0 && !rows[idx].selectable() {
            idx -= 1;
        }
        self.selected = idx;
        self.list_state.select(Some(self.selected));
    }
}

impl Default for NavDrawerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the drawer overlay.
pub struct NavDrawer<'a> {
    state: &'a mut NavDrawerState,
    rows: &'a [DrawerRow],
    shop_name: &'a str,
}

impl<'a> NavDrawer<'a> {
    pub fn new(state: &'a mut NavDrawerState, rows: &'a [DrawerRow], shop_name: &'a str) -> Self {
        Self {
            state,
            rows,
            shop_name,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Slide in from the left, 3/4 of the screen up to a fixed cap
        let width = (area.width * 3 / 4).clamp(20, 38).min(area.width);
        let overlay = Rect::new(area.x, area.y, width, area.height);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = " ↑↓ Move  Enter Select  Esc Close ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.shop_name))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        let inner_width = overlay.width.saturating_sub(4) as usize; // borders + padding

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| self.row_item(i, row, inner_width))
            .collect();

        self.state.list_state.select(Some(self.state.selected));
        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }

    fn row_item(&self, index: usize, row: &DrawerRow, inner_width: usize) -> ListItem<'static> {
        let selected = index == self.state.selected;
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);

        let line = match row {
            DrawerRow::Link { label, .. } => {
                let style = if selected {
                    highlight
                } else {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                };
                Line::from(Span::styled(pad_to(label, inner_width), style))
            }
            DrawerRow::Toggle { label, expanded } => {
                // Down-chevron when expanded, right-chevron when collapsed,
                // pushed to the row's right edge.
                let chevron = if *expanded { "▾" } else { "▸" };
                let gap = inner_width
                    .saturating_sub(label.width())
                    .saturating_sub(chevron.width());
                let label_style = if selected {
                    highlight
                } else {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                };
                let chevron_style = if selected {
                    highlight
                } else {
                    Style::default().fg(Color::Cyan)
                };
                Line::from(vec![
                    Span::styled(label.clone(), label_style),
                    Span::styled(" ".repeat(gap), label_style),
                    Span::styled(chevron.to_string(), chevron_style),
                ])
            }
            DrawerRow::SubLink { label, .. } => {
                let style = if selected {
                    highlight
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(Span::styled(
                    pad_to(&format!("  • {label}"), inner_width),
                    style,
                ))
            }
            DrawerRow::Divider => Line::from(Span::styled(
                "─".repeat(inner_width),
                Style::default().fg(Color::DarkGray),
            )),
            DrawerRow::Cart { count } => {
                // Badge renders only when the cart is non-empty, exact count.
                let badge = if *count > 0 {
                    format!("({count})")
                } else {
                    String::new()
                };
                let gap = inner_width
                    .saturating_sub("Cart".width())
                    .saturating_sub(badge.width());
                let label_style = if selected {
                    highlight
                } else {
                    Style::default().fg(Color::Gray)
                };
                let badge_style = if selected {
                    highlight
                } else {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                };
                Line::from(vec![
                    Span::styled("Cart", label_style),
                    Span::styled(" ".repeat(gap), label_style),
                    Span::styled(badge, badge_style),
                ])
            }
            DrawerRow::Account => self.footer_line("My Account", selected, inner_width),
            DrawerRow::SignOut => self.footer_line("Sign Out", selected, inner_width),
            DrawerRow::SignIn => self.footer_line("Sign In", selected, inner_width),
            DrawerRow::TrackOrder => self.footer_line("Track Order", selected, inner_width),
            DrawerRow::ContactUs => self.footer_line("Contact Us", selected, inner_width),
        };

        ListItem::new(line)
    }

    fn footer_line(&self, label: &str, selected: bool, inner_width: usize) -> Line<'static> {
        let style = if selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        Line::from(Span::styled(pad_to(label, inner_width), style))
    }
}

/// Pad a label with trailing spaces so the selection highlight spans the row.
fn pad_to(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}
