//! # Cart Panel Component
//!
//! The overlay behind the drawer's Cart action. The cart itself is owned by
//! the session backend; this panel only shows the snapshot's item count.
//! Dismissed with Esc.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use ratatui::Frame;

use crate::tui::component::Component;

pub struct CartPanel {
    pub cart_count: u32,
}

impl CartPanel {
    pub fn new(cart_count: u32) -> Self {
        Self { cart_count }
    }
}

impl Component for CartPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 30, area);
        frame.render_widget(Clear, overlay);

        let body = match self.cart_count {
            0 => "Your cart is empty.".to_string(),
            1 => "1 item in your cart.".to_string(),
            n => format!("{n} items in your cart."),
        };

        let panel = Paragraph::new(body)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Cart ")
                    .title_alignment(Alignment::Left)
                    .title_bottom(Line::from(" Esc Close ").centered())
                    .padding(Padding::uniform(1)),
            );

        frame.render_widget(panel, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
