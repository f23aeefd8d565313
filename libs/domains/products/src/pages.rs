//! Server-rendered HTML views.

use handlebars::Handlebars;
use serde_json::json;
use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

const INDEX_TEMPLATE: &str = "index";

/// Handlebars registry holding the product views.
///
/// Templates are compiled once in [`ProductPages::new`]; the registry is
/// read-only afterwards and shared across request tasks.
#[derive(Clone)]
pub struct ProductPages {
    registry: Arc<Handlebars<'static>>,
}

impl ProductPages {
    pub fn new() -> ProductResult<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(INDEX_TEMPLATE, include_str!("../templates/index.hbs"))
            .map_err(|e| {
                ProductError::Template(format!("Failed to register index template: {}", e))
            })?;

        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    /// Render the product table. Values are HTML-escaped.
    pub fn render_index(&self, products: &[Product]) -> ProductResult<String> {
        self.registry
            .render(INDEX_TEMPLATE, &json!({ "produtos": products }))
            .map_err(|e| ProductError::Template(format!("Failed to render index: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_rows() {
        let pages = ProductPages::new().unwrap();

        let html = pages
            .render_index(&[
                Product::new("Caneta", "Azul", 2.5, 100).with_id(1),
                Product::new("Lápis", "HB", 1.0, 30).with_id(2),
            ])
            .unwrap();

        assert!(html.contains("<td>Caneta</td>"));
        assert!(html.contains("<td>Lápis</td>"));
        assert!(html.contains("2.5"));
        assert!(!html.contains("Nenhum produto"));
    }

    #[test]
    fn test_renders_empty_state() {
        let pages = ProductPages::new().unwrap();

        let html = pages.render_index(&[]).unwrap();

        assert!(html.contains("Nenhum produto cadastrado."));
    }

    #[test]
    fn test_escapes_html() {
        let pages = ProductPages::new().unwrap();

        let html = pages
            .render_index(&[Product::new("<script>x</script>", "", 1.0, 1)])
            .unwrap();

        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
