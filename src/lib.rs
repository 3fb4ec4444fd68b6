pub mod api;
pub mod common;
pub mod fixtures;
pub mod models;
pub mod nav;
pub mod store;
pub mod web;
