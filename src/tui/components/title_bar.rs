//! # TitleBar Component
//!
//! Top status bar showing the shop wordmark, the current route, the cart
//! count, and transient status messages.
//!
//! Purely presentational — it receives all data as props and holds no
//! internal state. The three props come from different owners (shop name and
//! status from core `App`, route from the router, cart count from the session
//! snapshot); the TitleBar doesn't care where they come from, it just renders
//! what it's given.

use crate::tui::component::Component;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

pub struct TitleBar {
    pub shop_name: String,
    pub route: String,
    pub cart_count: u32,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(shop_name: String, route: String, cart_count: u32, status_message: String) -> Self {
        Self {
            shop_name,
            route,
            cart_count,
            status_message,
        }
    }
}

impl Component for TitleBar {
    /// Render as a single line: `<shop> | <route> [| Cart: n] [| status]`.
    /// The cart segment appears only when the cart is non-empty, mirroring
    /// the drawer's badge rule.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut title_text = format!("{} | {}", self.shop_name, self.route);
        if self.cart_count > 0 {
            title_text.push_str(&format!(" | Cart: {}", self.cart_count));
        }
        if !self.status_message.is_empty() {
            title_text.push_str(&format!(" | {}", self.status_message));
        }
        frame.render_widget(Span::raw(title_text), area);
    }
}
