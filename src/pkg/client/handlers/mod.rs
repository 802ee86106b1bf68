pub mod admin;
pub mod auth;
pub mod filters;
pub mod jobs;
pub mod saved;
pub mod ui;
