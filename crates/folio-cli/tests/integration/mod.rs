//! Integration test modules.

mod config_flow;
mod render_site;
mod scan_documents;
