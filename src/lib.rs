pub mod backend_client;
pub mod configuration;
pub mod domain;
pub mod landing;
pub mod navigation;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod templates;
mod utils;
