use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{SidebarItem, SidebarSection};
use crate::nav::CatalogSummary;
use crate::status::StatusCategory;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BuildSidebarParams {
    /// Entry kind to list: "question", "template", "case" or "conclusion".
    /// Omit to get every sidebar section.
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ClassifyStatusParams {
    /// Raw status value as it appears in the catalog. May be any JSON value or omitted.
    pub status: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SidebarResponse {
    /// Grouped sections, present when no kind was requested
    pub sections: Option<Vec<SidebarSection>>,
    /// Flat list for the requested kind
    pub items: Option<Vec<SidebarItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClassifyStatusResponse {
    pub category: StatusCategory,
    pub label: String,
    pub css_class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogOverviewResponse {
    pub summary: CatalogSummary,
    pub fingerprint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReloadCatalogResponse {
    pub updated: bool,
    pub fingerprint: String,
    pub entry_count: usize,
    pub skipped: usize,
}
