//! Algolia index configuration and settings.
//!
//! This module defines the connection details for the target index and the
//! relevance settings applied to the product catalog index.

use std::collections::BTreeMap;
use std::fmt;

use catalog_indexer_shared::{
    FacetOrdering, FacetValuesOrder, FacetsOrder, IndexSettings, RenderingContent,
    SortRemainingBy,
};

/// Configuration for the target index.
#[derive(Clone)]
pub struct IndexConfig {
    /// The Algolia application identifier.
    pub app_id: String,
    /// API key with write access to the index.
    pub api_key: String,
    /// The name of the index all operations target.
    pub index_name: String,
    /// Base URL override. Defaults to `https://{app_id}.algolia.net`.
    pub host: Option<String>,
}

impl IndexConfig {
    /// Create a new index configuration using the application's default host.
    ///
    /// # Arguments
    ///
    /// * `app_id` - The application identifier
    /// * `api_key` - The API key
    /// * `index_name` - The target index name
    pub fn new(
        app_id: impl Into<String>,
        api_key: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            api_key: api_key.into(),
            index_name: index_name.into(),
            host: None,
        }
    }

    /// Use `host` as the base URL instead of the application's default host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> String {
        match &self.host {
            Some(host) => host.clone(),
            None => format!("https://{}.algolia.net", self.app_id),
        }
    }
}

impl fmt::Debug for IndexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexConfig")
            .field("app_id", &self.app_id)
            .field("api_key", &"<redacted>")
            .field("index_name", &self.index_name)
            .field("host", &self.host)
            .finish()
    }
}

/// Display order of the `price_range` facet values.
pub const PRICE_RANGE_ORDER: [&str; 6] = [
    "1 - 50",
    "50 - 100",
    "100 - 200",
    "200 - 500",
    "500 - 2000",
    "> 2000",
];

/// Display order of the `rating` facet values, best first.
pub const RATING_ORDER: [&str; 6] = ["6", "5", "4", "3", "2", "1"];

/// Get the relevance settings for the product catalog index.
///
/// The configuration includes:
/// - **Searchable attributes**: `name`, then `description`
/// - **Custom ranking**: popularity, then rating, both descending
/// - **Facets**: brand, categories, price range, rating
/// - **Facet ordering**: rating before price range, with fixed value orders and
///   unlisted values hidden
pub fn catalog_index_settings() -> IndexSettings {
    let mut values = BTreeMap::new();
    values.insert(
        "price_range".to_string(),
        FacetValuesOrder::new(PRICE_RANGE_ORDER, SortRemainingBy::Hidden),
    );
    values.insert(
        "rating".to_string(),
        FacetValuesOrder::new(RATING_ORDER, SortRemainingBy::Hidden),
    );

    IndexSettings {
        searchable_attributes: strings(["name", "description"]),
        custom_ranking: strings(["desc(popularity)", "desc(rating)"]),
        attributes_for_faceting: strings(["brand", "categories", "price_range", "rating"]),
        rendering_content: Some(RenderingContent {
            facet_ordering: FacetOrdering {
                facets: FacetsOrder {
                    order: strings(["rating", "price_range"]),
                },
                values,
            },
        }),
    }
}

fn strings<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
