pub mod app;
pub mod controller;
pub mod handler;

pub use handler::AppHandler;
