pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod persistence;
pub mod store;
pub mod ui;
