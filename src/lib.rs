pub mod auth;
pub mod config;
pub mod data;
pub mod history;
pub mod profile;
pub mod purchases;
pub mod routes;
pub mod timer;
pub mod types;
pub mod ui;
pub mod validation;
pub mod views;
pub mod widget;
