pub mod catalog;
pub mod db;
pub mod models;
pub mod server;
pub mod settings;
pub mod telemetry;
