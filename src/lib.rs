pub mod app_state;
pub mod config;
pub mod errors;
pub mod gateways;
pub mod models;
pub mod services;
pub mod views;

#[cfg(test)]
pub mod test_utils;
