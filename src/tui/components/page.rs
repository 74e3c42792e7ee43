//! # Page Component
//!
//! Renders the content area for the current route. The drawer is the subject
//! of this crate; pages exist so navigation lands somewhere observable. Each
//! route the drawer can reach gets a heading and a short placeholder body.
//!
//! `/products?category=<slug>` resolves the slug back to its menu label for
//! the heading, so the page and the drawer can never disagree on naming.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::menu::{self, MenuItem};
use crate::tui::component::Component;

pub struct Page<'a> {
    pub route: &'a str,
    pub menu: &'a [MenuItem],
    pub authenticated: bool,
}

impl<'a> Page<'a> {
    pub fn new(route: &'a str, menu: &'a [MenuItem], authenticated: bool) -> Self {
        Self {
            route,
            menu,
            authenticated,
        }
    }

    /// Resolve the route into a heading and body text.
    fn content(&self) -> (String, String) {
        let (path, query) = match self.route.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (self.route, None),
        };

        match path {
            "/" => (
                "Welcome".to_string(),
                "Browse the catalog from the menu (press m).".to_string(),
            ),
            "/products" => {
                let category = query
                    .and_then(|q| q.strip_prefix("category="))
                    .map(|slug| {
                        menu::category_label(self.menu, slug)
                            .map(str::to_string)
                            .unwrap_or_else(|| slug.to_string())
                    });
                match category {
                    Some(label) => (label, "Products in this category.".to_string()),
                    None => ("All Products".to_string(), "The full catalog.".to_string()),
                }
            }
            "/account" => (
                "My Account".to_string(),
                "Orders, addresses, and preferences.".to_string(),
            ),
            "/auth" => (
                "Sign In".to_string(),
                "Sign in to see your account and order history.".to_string(),
            ),
            "/track-order" => (
                "Track Order".to_string(),
                "Enter an order number to see its status.".to_string(),
            ),
            "/contact" => (
                "Contact Us".to_string(),
                "We usually reply within one business day.".to_string(),
            ),
            other => (
                "Not Found".to_string(),
                format!("No page at {other}."),
            ),
        }
    }
}

impl Component for Page<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (heading, body) = self.content();

        let auth_note = if self.authenticated {
            ""
        } else {
            "  (signed out)"
        };

        let lines = vec![
            Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(body, Style::default().fg(Color::Gray))),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" {}{} ", self.route, auth_note))
                    .title_alignment(Alignment::Left)
                    .padding(Padding::uniform(1)),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::default_menu;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_route(route: &str) -> String {
        let menu = default_menu();
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut page = Page::new(route, &menu, false);
                page.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_products_page() {
        let text = render_route("/products");
        assert!(text.contains("All Products"));
    }

    #[test]
    fn test_category_page_resolves_label() {
        let text = render_route("/products?category=pre-workout");
        assert!(text.contains("Pre Workout"));
    }

    #[test]
    fn test_unknown_category_falls_back_to_slug() {
        let text = render_route("/products?category=mystery");
        assert!(text.contains("mystery"));
    }

    #[test]
    fn test_fixed_routes() {
        assert!(render_route("/track-order").contains("Track Order"));
        assert!(render_route("/contact").contains("Contact Us"));
        assert!(render_route("/auth").contains("Sign In"));
        assert!(render_route("/account").contains("My Account"));
    }

    #[test]
    fn test_unknown_route() {
        assert!(render_route("/nowhere").contains("Not Found"));
    }
}
