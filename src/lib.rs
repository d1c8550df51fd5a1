pub mod api;
pub mod bootstrap;
pub mod browser;
pub mod cleanup;
pub mod configuration;
pub mod pages;
pub mod storefront;
pub mod telemetry;
pub mod test_data;
