//! In-process router: the "navigate to path and record a history entry"
//! primitive the drawer composes with. Paths are literal strings, including
//! any query part (`/products?category=protein`).

/// Navigation history. The current route is always the last entry.
#[derive(Debug)]
pub struct Router {
    history: Vec<String>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            history: vec!["/".to_string()],
        }
    }

    /// Navigate to `path`, recording a history entry.
    pub fn navigate(&mut self, path: &str) {
        log::debug!("Navigate: {} -> {}", self.current(), path);
        self.history.push(path.to_string());
    }

    pub fn current(&self) -> &str {
        // History is never empty: new() seeds it and navigate() only pushes.
        self.history.last().map(String::as_str).unwrap_or("/")
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Splits the current route into path and optional query string.
    pub fn current_parts(&self) -> (&str, Option<&str>) {
        match self.current().split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (self.current(), None),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
