pub mod api;
pub mod collate;
pub mod error;
pub mod escape;
pub mod loader;
pub mod model;
pub mod nav;
pub mod sidebar;
pub mod status;
