// Library for tests to access modules
pub mod compose;
pub mod config;
pub mod delivery;
pub mod mapping;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod report_worker;
pub mod resolve;
pub mod routes;
pub mod sources;
pub mod telemetry_store;
pub mod totalizer;
pub mod version;
pub mod window;
