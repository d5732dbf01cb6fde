use crate::decor::DecorSource;
use chrono::{DateTime, Utc};
use pagekit_schema::Viewport;
use serde::{Deserialize, Serialize};

/// Where the output will be shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Public storefront page
    #[default]
    Live,
    /// Embedded editor preview; the selected section is marked
    Editor { selected: Option<String> },
}

/// Product data supplied by the host catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub compare_at_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub url: String,
}

/// Catalog snapshot handed to the renderer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<ProductCard>,
    #[serde(default)]
    pub categories: Vec<CategoryCard>,
}

/// Inputs a render depends on besides the component itself
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub now: DateTime<Utc>,
    pub viewport: Viewport,
    pub mode: RenderMode,
    pub decor: DecorSource,
    pub catalog: Catalog,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            now: Utc::now(),
            viewport: Viewport::Desktop,
            mode: RenderMode::Live,
            decor: DecorSource::default(),
            catalog: Catalog::default(),
        }
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_decor(mut self, decor: DecorSource) -> Self {
        self.decor = decor;
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn is_selected(&self, component_id: &str) -> bool {
        matches!(&self.mode, RenderMode::Editor { selected: Some(id) } if id == component_id)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}
