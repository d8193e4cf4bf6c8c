use tera::{Context, Tera};

use crate::errors::Result;
use crate::models::CatalogPage;

pub const HOME_TEMPLATE: &str = "home.html";

/// Templates are compiled into the binary and parsed once at startup.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(HOME_TEMPLATE, include_str!("../templates/home.html"))?;
        Ok(Self { tera })
    }

    pub fn render_home(&self, page: &CatalogPage) -> Result<String> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render(HOME_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn page(items: Vec<Product>, next: Option<&str>, prev: Option<&str>) -> CatalogPage {
        CatalogPage {
            page: 2,
            items,
            next_page: next.map(str::to_string),
            prev_page: prev.map(str::to_string),
        }
    }

    #[test]
    fn test_renders_products_and_links() {
        let templates = Templates::new().unwrap();
        let product = Product {
            id: 31,
            name: "Watch Grace".to_string(),
            description: "Discover our premium-quality Watch for all your needs.".to_string(),
            price: 432.1,
            image_url: "https://source.unsplash.com/200x200/?Watch".to_string(),
        };

        let html = templates
            .render_home(&page(vec![product], Some("3"), Some("1")))
            .unwrap();
        assert!(html.contains("Watch Grace"));
        assert!(html.contains("id=\"product-31\""));
        assert!(html.contains("432.1"));
        assert!(html.contains("/home?page=3"));
        assert!(html.contains("/home?page=1"));
    }

    #[test]
    fn test_missing_links_are_omitted() {
        let templates = Templates::new().unwrap();
        let html = templates.render_home(&page(Vec::new(), None, None)).unwrap();
        assert!(html.contains("No products on this page."));
        assert!(!html.contains("class=\"next\""));
        assert!(!html.contains("class=\"prev\""));
    }

    #[test]
    fn test_product_text_is_escaped() {
        let templates = Templates::new().unwrap();
        let product = Product {
            id: 1,
            name: "<script>alert(1)</script>".to_string(),
            description: String::new(),
            price: 100.0,
            image_url: String::new(),
        };
        let html = templates.render_home(&page(vec![product], None, None)).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
