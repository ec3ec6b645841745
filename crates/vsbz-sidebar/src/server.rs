/// MCP server exposing the sidebar catalog.
///
/// Tools:
/// - `build_sidebar`: grouped sidebar sections, or the list for one entry kind
/// - `classify_status`: canonical category and label for a raw case status
/// - `catalog_overview`: entry counts per kind and case counts per status
/// - `reload_catalog`: re-read the catalog export if its content changed
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::config::Config;
use crate::update::ReloadService;
use vsbz_catalog::api::{
    BuildSidebarParams, CatalogOverviewResponse, ClassifyStatusParams, ClassifyStatusResponse,
    ReloadCatalogResponse, SidebarResponse,
};
use vsbz_catalog::loader::LoadedCatalog;
use vsbz_catalog::model::{CatalogEntry, EntryKind};
use vsbz_catalog::nav::{self, SidebarLayout};
use vsbz_catalog::{sidebar, status};

/// Loaded catalog, written only by `reload_catalog`.
pub struct AppState {
    pub entries: Vec<CatalogEntry>,
    pub fingerprint: String,
}

#[derive(Clone)]
pub struct SidebarServer {
    state: Arc<RwLock<AppState>>,
    layout: Arc<SidebarLayout>,
    reload_service: Arc<ReloadService>,
    tool_router: ToolRouter<SidebarServer>,
}

impl SidebarServer {
    pub fn new(catalog: LoadedCatalog, config: Config) -> Self {
        let state = Arc::new(RwLock::new(AppState {
            entries: catalog.entries,
            fingerprint: catalog.fingerprint,
        }));

        Self {
            state,
            layout: Arc::new(config.layout()),
            reload_service: Arc::new(ReloadService::new(config)),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl SidebarServer {
    #[tool(description = "Build the documentation sidebar. Without 'kind' returns every section (questions, templates, cases, conclusions); with 'kind' returns the sorted list for that entry kind.")]
    async fn build_sidebar(
        &self,
        Parameters(params): Parameters<BuildSidebarParams>,
    ) -> Result<Json<SidebarResponse>, String> {
        let requested = params
            .kind
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());

        let state = self.state.read().await;
        let Some(raw_kind) = requested else {
            let sections = nav::build_sidebar(&state.entries, &self.layout);
            return Ok(Json(SidebarResponse {
                sections: Some(sections),
                items: None,
            }));
        };

        let kind: EntryKind = raw_kind.parse().map_err(|e| {
            let available: Vec<&str> = EntryKind::ALL.iter().map(|k| k.as_str()).collect();
            format!("{e}. Available kinds: {}", available.join(", "))
        })?;

        let items = match kind {
            EntryKind::Conclusion => sidebar::build_conclusions_list(&state.entries),
            other => sidebar::build_list(&state.entries, other),
        };

        Ok(Json(SidebarResponse {
            sections: None,
            items: Some(items),
        }))
    }

    #[tool(description = "Classify a raw case status (Hungarian or English, accented or not) into open, answered, followup or unknown, with its display label.")]
    async fn classify_status(
        &self,
        Parameters(params): Parameters<ClassifyStatusParams>,
    ) -> Result<Json<ClassifyStatusResponse>, String> {
        let raw = params.status.as_ref();
        let category = status::classify(raw);

        Ok(Json(ClassifyStatusResponse {
            category,
            label: status::label(raw),
            css_class: category.css_class(),
        }))
    }

    #[tool(description = "Summarize the loaded catalog: number of entries per kind and number of cases per status category.")]
    async fn catalog_overview(&self) -> Result<Json<CatalogOverviewResponse>, String> {
        let state = self.state.read().await;
        Ok(Json(CatalogOverviewResponse {
            summary: nav::summarize(&state.entries),
            fingerprint: state.fingerprint.clone(),
        }))
    }

    #[tool(description = "Re-read the catalog export from disk. The in-memory catalog is replaced only when the file content changed.")]
    async fn reload_catalog(&self) -> Result<Json<ReloadCatalogResponse>, String> {
        info!("reload_catalog tool invoked");

        let current = self.state.read().await.fingerprint.clone();
        // file read and hashing stay off the async workers
        let reload_service = Arc::clone(&self.reload_service);
        let (result, new_catalog) =
            tokio::task::spawn_blocking(move || reload_service.reload(&current))
                .await
                .map_err(|e| format!("reload task failed: {e}"))?
                .map_err(|e| format!("reload failed: {e}"))?;

        if let Some(catalog) = new_catalog {
            let entry_count = catalog.entries.len();
            let mut state = self.state.write().await;
            state.entries = catalog.entries;
            state.fingerprint = catalog.fingerprint;
            info!(entry_count, "in-memory catalog updated");
        }

        Ok(Json(ReloadCatalogResponse {
            updated: result.updated,
            fingerprint: result.fingerprint,
            entry_count: result.entry_count,
            skipped: result.skipped,
        }))
    }
}

#[tool_handler]
impl ServerHandler for SidebarServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: "vsbz-sidebar".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Documentation sidebar MCP server. Builds the navigation sidebar from the \
                 content catalog. Use build_sidebar for the grouped sections or one entry \
                 kind, classify_status to see how a case status is categorized, \
                 catalog_overview for counts, and reload_catalog after the catalog export \
                 changes."
                    .to_string(),
            ),
        }
    }
}
