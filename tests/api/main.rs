#[path = "../common/mod.rs"]
mod common;

mod account;
mod products;
