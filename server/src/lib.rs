#[macro_use]
extern crate rocket;

pub mod db;
pub mod entrypoints;
pub mod error;
pub mod store;
pub mod types;
