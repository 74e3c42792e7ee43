//! # Menu Model
//!
//! The navigation tree is a fixed, ordered sequence of [`MenuItem`]s decided
//! at construction time — no runtime fetch. Items either link somewhere
//! directly (leaf) or carry an ordered `submenu` of links (parent). A parent's
//! own `href` is a placeholder; activating a parent only toggles its submenu.
//!
//! The tree is injected into [`App`](crate::core::state::App) rather than read
//! from a global, so tests can substitute a small tree without touching any
//! drawer logic.

use serde::{Deserialize, Serialize};

/// A directly navigable entry inside a submenu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
}

impl MenuLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// A top-level navigation entry.
///
/// Leaf items (`submenu: None`) always have a navigable `href`. Parent items
/// use `"#"` as their `href` — it is never navigated to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuItem {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<MenuLink>>,
}

impl MenuItem {
    /// A directly navigable top-level entry.
    pub fn leaf(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            submenu: None,
        }
    }

    /// A collapsible parent entry. Its own href is a placeholder.
    pub fn parent(label: &str, submenu: Vec<MenuLink>) -> Self {
        Self {
            label: label.to_string(),
            href: "#".to_string(),
            submenu: Some(submenu),
        }
    }

    pub fn is_parent(&self) -> bool {
        self.submenu.is_some()
    }
}

/// The stock storefront menu: "All Products" plus the category tree.
///
/// Category slugs are fixed — they are the query values the products page
/// filters on, so renaming one here breaks the corresponding route.
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::leaf("All Products", "/products"),
        MenuItem::parent(
            "Categories",
            vec![
                MenuLink::new("Pre Workout", "/products?category=pre-workout"),
                MenuLink::new("Protein", "/products?category=protein"),
                MenuLink::new("Creatine", "/products?category=creatine"),
                MenuLink::new("BCAA", "/products?category=bcaa"),
                MenuLink::new("Aminos", "/products?category=aminos"),
                MenuLink::new("Vitamins", "/products?category=vitamins"),
                MenuLink::new("Multivitamin", "/products?category=multivitamin"),
                MenuLink::new("Fat Burners", "/products?category=fat-burners"),
                MenuLink::new("Pump Supplement", "/products?category=pump-supplement"),
                MenuLink::new("Testosterone", "/products?category=testosterone"),
                MenuLink::new(
                    "Anti-Aging Supplement",
                    "/products?category=anti-aging-supplement",
                ),
                MenuLink::new("Dry Spell", "/products?category=dry-spell"),
            ],
        ),
    ]
}

/// Look up the display label for a category slug in the given menu tree.
///
/// Used by the products page to render a heading for
/// `/products?category=<slug>` routes. Unknown slugs return `None`.
pub fn category_label<'a>(menu: &'a [MenuItem], slug: &str) -> Option<&'a str> {
    let suffix = format!("?category={slug}");
    menu.iter()
        .filter_map(|item| item.submenu.as_deref())
        .flatten()
        .find(|link| link.href.ends_with(&suffix))
        .map(|link| link.label.as_str())
}
