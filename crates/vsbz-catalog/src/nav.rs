use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{CatalogEntry, EntryKind, SidebarSection};
use crate::sidebar::{build_conclusions_list, build_list};
use crate::status::{classify, StatusCategory};

/// How the sidebar groups are titled and whether they start collapsed.
#[derive(Debug, Clone)]
pub struct SidebarLayout {
    pub collapsed: bool,
    pub question_title: String,
    pub template_title: String,
    pub case_title: String,
    pub conclusion_title: String,
}

impl Default for SidebarLayout {
    fn default() -> Self {
        Self {
            collapsed: false,
            question_title: "Kérdések".to_string(),
            template_title: "Sablonok".to_string(),
            case_title: "Esetek".to_string(),
            conclusion_title: "Következtetések".to_string(),
        }
    }
}

impl SidebarLayout {
    pub fn title(&self, kind: EntryKind) -> &str {
        match kind {
            EntryKind::Question => &self.question_title,
            EntryKind::Template => &self.template_title,
            EntryKind::Case => &self.case_title,
            EntryKind::Conclusion => &self.conclusion_title,
        }
    }
}

/// Build the grouped sidebar: one section per kind, in `EntryKind::ALL` order.
/// Kinds without entries get no section.
pub fn build_sidebar(catalog: &[CatalogEntry], layout: &SidebarLayout) -> Vec<SidebarSection> {
    EntryKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let items = match kind {
                EntryKind::Conclusion => build_conclusions_list(catalog),
                other => build_list(catalog, other),
            };
            if items.is_empty() {
                return None;
            }
            Some(SidebarSection {
                text: layout.title(kind).to_string(),
                collapsed: layout.collapsed,
                items,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KindCount {
    pub kind: EntryKind,
    pub entry_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusCount {
    pub category: StatusCategory,
    pub case_count: usize,
}

/// Entry counts per kind and case counts per status category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogSummary {
    pub kinds: Vec<KindCount>,
    pub statuses: Vec<StatusCount>,
}

/// Count entries per kind and cases per status. Every kind and category is reported,
/// zero counts included.
pub fn summarize(catalog: &[CatalogEntry]) -> CatalogSummary {
    let kinds = EntryKind::ALL
        .into_iter()
        .map(|kind| KindCount {
            kind,
            entry_count: catalog.iter().filter(|e| e.kind() == kind).count(),
        })
        .collect();

    let case_categories: Vec<StatusCategory> = catalog
        .iter()
        .filter_map(|e| match e {
            CatalogEntry::Case(case) => Some(classify(case.status.as_ref())),
            _ => None,
        })
        .collect();

    let statuses = StatusCategory::ALL
        .into_iter()
        .map(|category| StatusCount {
            category,
            case_count: case_categories.iter().filter(|c| **c == category).count(),
        })
        .collect();

    CatalogSummary { kinds, statuses }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CaseEntry, EntryMeta};
    use serde_json::json;

    fn meta(id: &str) -> EntryMeta {
        EntryMeta {
            id: id.to_string(),
            title: format!("{id} title"),
            route: format!("/{}", id.to_lowercase()),
        }
    }

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::Conclusion(meta("V1")),
            CatalogEntry::Case(CaseEntry {
                meta: meta("K2"),
                status: Some(json!("open")),
            }),
            CatalogEntry::Question(meta("Q1")),
            CatalogEntry::Case(CaseEntry {
                meta: meta("K1"),
                status: Some(json!("Nyitott")),
            }),
            CatalogEntry::Case(CaseEntry {
                meta: meta("K3"),
                status: None,
            }),
        ]
    }

    #[test]
    fn sections_in_fixed_order_and_empty_ones_skipped() {
        let sections = build_sidebar(&catalog(), &SidebarLayout::default());
        let titles: Vec<&str> = sections.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(titles, vec!["Kérdések", "Esetek", "Következtetések"]);

        let cases = &sections[1];
        assert!(!cases.collapsed);
        let links: Vec<&str> = cases.items.iter().map(|i| i.link.as_str()).collect();
        assert_eq!(links, vec!["/k1", "/k2", "/k3"]);
    }

    #[test]
    fn layout_titles_and_collapse_apply() {
        let layout = SidebarLayout {
            collapsed: true,
            case_title: "Cases".to_string(),
            ..SidebarLayout::default()
        };
        let sections = build_sidebar(&catalog(), &layout);
        assert!(sections.iter().all(|s| s.collapsed));
        assert!(sections.iter().any(|s| s.text == "Cases"));
    }

    #[test]
    fn empty_catalog_has_no_sections() {
        assert!(build_sidebar(&[], &SidebarLayout::default()).is_empty());
    }

    #[test]
    fn summary_counts_kinds_and_statuses() {
        let summary = summarize(&catalog());
        assert_eq!(
            summary.kinds,
            vec![
                KindCount { kind: EntryKind::Question, entry_count: 1 },
                KindCount { kind: EntryKind::Template, entry_count: 0 },
                KindCount { kind: EntryKind::Case, entry_count: 3 },
                KindCount { kind: EntryKind::Conclusion, entry_count: 1 },
            ]
        );
        assert_eq!(
            summary.statuses,
            vec![
                StatusCount { category: StatusCategory::Open, case_count: 2 },
                StatusCount { category: StatusCategory::Answered, case_count: 0 },
                StatusCount { category: StatusCategory::Followup, case_count: 0 },
                StatusCount { category: StatusCategory::Unknown, case_count: 1 },
            ]
        );
    }
}
