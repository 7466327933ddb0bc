pub mod admin;
pub mod common;
pub mod editor;
pub mod models;
pub mod services;
