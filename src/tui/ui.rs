use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{CartPanel, NavDrawer, Page, TitleBar, build_rows};
use crate::tui::TuiState;

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::Frame;

/// Frame layout: title bar, page content, key hint bar. Overlays (cart
/// panel, then the drawer on top) render last so they cover the page.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hint_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.shop_name.clone(),
        app.router.current().to_string(),
        app.session.cart_count,
        app.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    let mut page = Page::new(
        app.router.current(),
        &app.menu,
        app.session.is_authenticated(),
    );
    page.render(frame, main_area);

    let hint = if app.drawer_open || app.cart_open {
        "" // The overlay carries its own help line
    } else {
        " m Menu  c Cart  q Quit"
    };
    frame.render_widget(
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
        hint_area,
    );

    if app.cart_open {
        let mut cart = CartPanel::new(app.session.cart_count);
        cart.render(frame, main_area);
    }

    if app.drawer_open {
        let rows = build_rows(&app.menu, &app.expanded, &app.session);
        let mut drawer = NavDrawer::new(&mut tui.drawer, &rows, &app.shop_name);
        drawer.render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, app, tui);
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
    fn test_draw_ui_closed_drawer() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("m Menu"));
        assert!(text.contains("Welcome"));
    }

    #[test]
    fn test_draw_ui_open_drawer_covers_hint() {
        let mut app = test_app();
        update(&mut app, Action::OpenDrawer);
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Esc Close"));
        assert!(!text.contains("m Menu"));
    }

    #[test]
    fn test_draw_ui_cart_panel() {
        let mut app = test_app();
        update(&mut app, Action::OpenCart);
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Your cart is empty"));
    }
}
