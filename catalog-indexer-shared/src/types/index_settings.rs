//! Index settings document types.
//!
//! These types describe the relevance configuration of a search index:
//! which attributes are searchable, the custom ranking, the facet attributes,
//! and how facets and facet values are ordered when rendered.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Relevance settings for a search index.
///
/// Serialized with the backend's camelCase field names. Optional sections are
/// omitted from the payload when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSettings {
    /// Attributes used for textual matching, in priority order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub searchable_attributes: Vec<String>,
    /// Tie-breaking ranking rules such as `desc(popularity)`, in priority order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_ranking: Vec<String>,
    /// Attributes exposed as facets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes_for_faceting: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendering_content: Option<RenderingContent>,
}

/// Presentation hints returned alongside search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderingContent {
    pub facet_ordering: FacetOrdering,
}

/// Order of facets and of the values within individual facets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOrdering {
    pub facets: FacetsOrder,
    /// Per-facet value ordering, keyed by facet attribute.
    #[serde(default)]
    pub values: BTreeMap<String, FacetValuesOrder>,
}

/// Explicit ordering of facet attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetsOrder {
    pub order: Vec<String>,
}

/// Explicit ordering of the values of a single facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetValuesOrder {
    pub order: Vec<String>,
    /// How values not listed in `order` are displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_remaining_by: Option<SortRemainingBy>,
}

/// Display policy for facet values missing from an explicit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortRemainingBy {
    Count,
    Alpha,
    Hidden,
}

impl FacetValuesOrder {
    /// Create a value ordering from a list of values and a policy for the rest.
    pub fn new<I, S>(order: I, sort_remaining_by: SortRemainingBy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            order: order.into_iter().map(Into::into).collect(),
            sort_remaining_by: Some(sort_remaining_by),
        }
    }
}
