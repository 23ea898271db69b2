//! Menu resources.
//!
//! `menu://all` and `menu://category/{category}` render the backend's menu
//! items as a Markdown document an agent can keep in context without calling
//! tools.

use serde_json::Value;

use super::{ResourceDefinition, ResourceTemplateDefinition};
use crate::domains::resources::service::ResourceContent;

/// Which part of the menu a resource covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuScope {
    /// Every item.
    All,
    /// Items of one category.
    Category(String),
}

impl MenuScope {
    /// Scope for a category segment. `all` selects the whole menu.
    pub fn from_category(category: &str) -> Self {
        if category == "all" {
            Self::All
        } else {
            Self::Category(category.to_string())
        }
    }

    /// The category filter to send to the backend, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Category(category) => Some(category),
        }
    }

    /// The raw label used in the document heading.
    pub fn label(&self) -> &str {
        self.category().unwrap_or("all")
    }
}

/// The full menu.
pub struct MenuResource;

impl ResourceDefinition for MenuResource {
    const URI: &'static str = "menu://all";
    const NAME: &'static str = "Restaurant Menu";
    const DESCRIPTION: &'static str = "The complete restaurant menu as readable text";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Menu(MenuScope::All)
    }
}

/// The menu restricted to one category.
pub struct MenuCategoryTemplate;

impl MenuCategoryTemplate {
    const URI_PREFIX: &'static str = "menu://category/";
}

impl ResourceTemplateDefinition for MenuCategoryTemplate {
    const URI_TEMPLATE: &'static str = "menu://category/{category}";
    const NAME: &'static str = "Menu by Category";
    const TITLE: &'static str = "Restaurant Menu Category";
    const DESCRIPTION: &'static str =
        "Menu items of one category (appetizer, main_course, dessert, beverage, side)";
    const MIME_TYPE: &'static str = "text/markdown";

    fn resolve(uri: &str) -> Option<ResourceContent> {
        let category = uri.strip_prefix(Self::URI_PREFIX)?;
        if category.is_empty() || category.contains('/') {
            return None;
        }
        Some(ResourceContent::Menu(MenuScope::from_category(category)))
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Loose availability check: non-zero numbers and non-empty strings or
/// collections count as set, as do `true` flags.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render menu items as Markdown.
///
/// Items are kept in backend order; a `##` heading is emitted whenever the
/// category differs from the previous item's.
pub fn render_menu(label: &str, items: &[Value]) -> String {
    let mut text = format!("# Restaurant Menu ({})\n\n", title_case(label));

    let mut current_category: Option<String> = None;
    for item in items {
        let category = field_text(item, "category", "Unknown");
        if current_category.as_deref() != Some(category.as_str()) {
            text.push_str(&format!("\n## {}\n\n", title_case(&category.replace('_', " "))));
            current_category = Some(category);
        }

        let name = field_text(item, "name", "Unknown");
        let price = item.get("price").and_then(price_value).unwrap_or(0.0);
        let description = field_text(item, "description", "No description");
        let available = if item.get("is_available").is_some_and(is_truthy) {
            "Item is available"
        } else {
            "Item is not available"
        };

        text.push_str(&format!("**{}** - ${:.2} [{}]\n", name, price, available));
        text.push_str(&format!("  {}\n\n", description));
    }

    text
}

/// Uppercase the first letter of every word, lowercase the rest. A word
/// starts after any non-alphabetic character, so `main_course` becomes
/// `Main_Course`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// A field as display text; missing and null fields fall back to `default`.
fn field_text(item: &Value, key: &str, default: &str) -> String {
    match item.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn price_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("appetizer"), "Appetizer");
        assert_eq!(title_case("main_course"), "Main_Course");
        assert_eq!(title_case("main course"), "Main Course");
        assert_eq!(title_case("ALL"), "All");
    }

    #[test]
    fn test_render_two_appetizers() {
        let items = vec![
            json!({"name": "A", "price": 5, "category": "appetizer", "is_available": true, "description": "d1"}),
            json!({"name": "B", "price": 7.5, "category": "appetizer", "is_available": false, "description": "d2"}),
        ];
        let text = render_menu("appetizer", &items);

        assert!(text.starts_with("# Restaurant Menu (Appetizer)\n\n"));
        assert_eq!(text.matches("## Appetizer").count(), 1);
        assert!(text.contains("**A** - $5.00 [Item is available]\n  d1\n\n"));
        assert!(text.contains("**B** - $7.50 [Item is not available]\n  d2\n\n"));

        let heading = text.find("## Appetizer").unwrap();
        assert!(heading < text.find("**A**").unwrap());
        assert!(text.find("**A**").unwrap() < text.find("**B**").unwrap());
    }

    #[test]
    fn test_render_defaults_missing_fields() {
        let text = render_menu("all", &[json!({})]);
        assert!(text.starts_with("# Restaurant Menu (All)\n\n"));
        assert!(text.contains("\n## Unknown\n\n"));
        assert!(text.contains("**Unknown** - $0.00 [Item is not available]\n  No description\n\n"));
    }

    #[test]
    fn test_render_numeric_availability_flag() {
        let items = vec![
            json!({"name": "C", "price": 3, "category": "side", "is_available": 1}),
            json!({"name": "D", "price": 4, "category": "side", "is_available": 0}),
        ];
        let text = render_menu("all", &items);

        assert!(text.contains("**C** - $3.00 [Item is available]"));
        assert!(text.contains("**D** - $4.00 [Item is not available]"));
    }

    #[test]
    fn test_render_heading_per_category_change() {
        let items = vec![
            json!({"name": "Soup", "category": "appetizer"}),
            json!({"name": "Steak", "category": "main_course"}),
            json!({"name": "Wings", "category": "appetizer"}),
        ];
        let text = render_menu("all", &items);
        assert_eq!(text.matches("## Appetizer").count(), 2);
        assert_eq!(text.matches("## Main Course").count(), 1);
    }

    #[test]
    fn test_render_empty_menu() {
        assert_eq!(render_menu("dessert", &[]), "# Restaurant Menu (Dessert)\n\n");
    }

    #[test]
    fn test_template_resolve() {
        assert!(matches!(
            MenuCategoryTemplate::resolve("menu://category/dessert"),
            Some(ResourceContent::Menu(MenuScope::Category(c))) if c == "dessert"
        ));
        assert!(matches!(
            MenuCategoryTemplate::resolve("menu://category/all"),
            Some(ResourceContent::Menu(MenuScope::All))
        ));
        assert!(MenuCategoryTemplate::resolve("menu://category/").is_none());
        assert!(MenuCategoryTemplate::resolve("menu://other").is_none());
    }
}
