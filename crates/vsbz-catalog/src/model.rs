use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Discriminator of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Question,
    Template,
    Case,
    Conclusion,
}

impl EntryKind {
    /// Sidebar order of the kinds.
    pub const ALL: [EntryKind; 4] = [
        EntryKind::Question,
        EntryKind::Template,
        EntryKind::Case,
        EntryKind::Conclusion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Question => "question",
            EntryKind::Template => "template",
            EntryKind::Case => "case",
            EntryKind::Conclusion => "conclusion",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    /// Accepts the lowercase name or its plural, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        EntryKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == singular)
            .ok_or_else(|| format!("unknown entry kind: '{}'", s.trim()))
    }
}

/// Fields shared by every catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryMeta {
    /// Identifier unique within its kind, e.g. "K-12"; sort key and sidebar label
    pub id: String,
    /// Display title
    pub title: String,
    /// Site route the sidebar links to, e.g. "/esetek/k-12"
    pub route: String,
}

/// A case: the only kind that carries a status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseEntry {
    #[serde(flatten)]
    pub meta: EntryMeta,
    /// Raw status from the catalog; any JSON value, possibly absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

/// One entry of the content catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogEntry {
    Question(EntryMeta),
    Template(EntryMeta),
    Case(CaseEntry),
    Conclusion(EntryMeta),
}

impl CatalogEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            CatalogEntry::Question(_) => EntryKind::Question,
            CatalogEntry::Template(_) => EntryKind::Template,
            CatalogEntry::Case(_) => EntryKind::Case,
            CatalogEntry::Conclusion(_) => EntryKind::Conclusion,
        }
    }

    pub fn meta(&self) -> &EntryMeta {
        match self {
            CatalogEntry::Question(meta)
            | CatalogEntry::Template(meta)
            | CatalogEntry::Conclusion(meta) => meta,
            CatalogEntry::Case(case) => &case.meta,
        }
    }

    pub fn id(&self) -> &str {
        &self.meta().id
    }
}

/// A render-ready navigation item handed to the site's sidebar renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SidebarItem {
    /// HTML fragment shown as the item label
    #[serde(rename = "text")]
    pub display_markup: String,
    /// Route the item links to
    pub link: String,
}

/// A titled sidebar group holding the items of one entry kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SidebarSection {
    /// Section heading
    pub text: String,
    pub collapsed: bool,
    pub items: Vec<SidebarItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_parses_loosely() {
        assert_eq!("case".parse::<EntryKind>(), Ok(EntryKind::Case));
        assert_eq!(" Conclusions ".parse::<EntryKind>(), Ok(EntryKind::Conclusion));
        assert_eq!("QUESTION".parse::<EntryKind>(), Ok(EntryKind::Question));
        assert!("glossary".parse::<EntryKind>().is_err());
        assert!("".parse::<EntryKind>().is_err());
    }

    #[test]
    fn case_entry_serde_shape() {
        let entry: CatalogEntry = serde_json::from_value(json!({
            "kind": "case",
            "id": "K-1",
            "title": "Első eset",
            "route": "/esetek/k-1",
            "status": "nyitott"
        }))
        .expect("valid case entry");

        assert_eq!(entry.kind(), EntryKind::Case);
        assert_eq!(entry.id(), "K-1");
        let CatalogEntry::Case(case) = &entry else {
            panic!("expected a case entry");
        };
        assert_eq!(case.status, Some(json!("nyitott")));
    }

    #[test]
    fn sidebar_item_uses_text_field() {
        let item = SidebarItem {
            display_markup: "<span>x</span>".to_string(),
            link: "/x".to_string(),
        };
        let value = serde_json::to_value(&item).expect("serializable");
        assert_eq!(value, json!({"text": "<span>x</span>", "link": "/x"}));
    }
}
