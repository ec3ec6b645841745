/// Sidebar list construction.
///
/// Filter the catalog to one kind, stable-sort by id with locale collation, and render each
/// entry as a card. The markup classes below are what the site stylesheet targets and must
/// not change:
///
/// ```text
/// <span class="vsbz-sidebar-card">
///   <span class="vsbz-sidebar-card__id">ID</span>
///   <span class="vsbz-sidebar-card__title">TITLE</span>
///   <span class="vsbz-sidebar-card__status vsbz-status--CATEGORY">   (cases only)
///     <span class="vsbz-status-dot"></span><span class="vsbz-status-text">LABEL</span>
///   </span>
/// </span>
/// ```
///
/// Rendered without the whitespace shown here.
use crate::collate::IdCollator;
use crate::escape::escape_html;
use crate::model::{CatalogEntry, EntryKind, SidebarItem};
use crate::status;

/// Build the sidebar list for one entry kind.
pub fn build_list(catalog: &[CatalogEntry], kind: EntryKind) -> Vec<SidebarItem> {
    let mut entries: Vec<&CatalogEntry> = catalog.iter().filter(|e| e.kind() == kind).collect();
    let collator = IdCollator::new();
    // sort_by is stable: equal ids keep catalog order
    entries.sort_by(|a, b| collator.compare(a.id(), b.id()));
    entries.into_iter().map(render_item).collect()
}

/// Build the conclusions list. Same as `build_list` with the kind fixed.
pub fn build_conclusions_list(catalog: &[CatalogEntry]) -> Vec<SidebarItem> {
    build_list(catalog, EntryKind::Conclusion)
}

pub fn render_item(entry: &CatalogEntry) -> SidebarItem {
    let meta = entry.meta();
    let badge = match entry {
        CatalogEntry::Case(case) => status_badge(case.status.as_ref()),
        _ => String::new(),
    };

    SidebarItem {
        display_markup: format!(
            concat!(
                r#"<span class="vsbz-sidebar-card">"#,
                r#"<span class="vsbz-sidebar-card__id">{}</span>"#,
                r#"<span class="vsbz-sidebar-card__title">{}</span>"#,
                "{}",
                "</span>"
            ),
            escape_html(&meta.id),
            escape_html(&meta.title),
            badge
        ),
        link: meta.route.clone(),
    }
}

/// Status badge markup for a case entry.
pub fn status_badge(raw_status: Option<&serde_json::Value>) -> String {
    let category = status::classify(raw_status);
    let label = status::label(raw_status);
    format!(
        concat!(
            r#"<span class="vsbz-sidebar-card__status {}">"#,
            r#"<span class="vsbz-status-dot"></span>"#,
            r#"<span class="vsbz-status-text">{}</span>"#,
            "</span>"
        ),
        category.css_class(),
        escape_html(&label)
    )
}
