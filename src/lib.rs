pub mod assets;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod utils;
pub mod web;
