#![warn(clippy::all, rust_2018_idioms)]

mod app;
mod cache;
mod criteria;
mod dataset;
mod error;
mod filter;
mod loader;
mod panel;
mod utils;
pub use app::App;
