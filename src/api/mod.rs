//! API endpoint modules.

pub mod health;
pub mod laporan;
pub mod openapi;
pub mod pages;

pub use health::configure_health_routes;
pub use laporan::configure_routes as configure_laporan_routes;
pub use openapi::{ApiDoc, configure_routes as configure_openapi_routes};
pub use pages::configure_routes as configure_page_routes;
