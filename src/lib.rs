pub mod app;
pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod repositories;
pub mod services;

#[cfg(test)]
pub mod test_utils;
