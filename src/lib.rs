pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod data_models;
pub mod date_range;
pub mod form;
pub mod render;
pub mod session;
