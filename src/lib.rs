// Library exports for testing and the translation checker binary
pub mod config;
pub mod html;
pub mod i18n;
pub mod server;
pub mod site;
