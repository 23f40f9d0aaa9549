pub mod builder;
pub mod care;
pub mod commands;
pub mod controller;
pub mod factory;
pub mod inventory;
pub mod irrigation;
pub mod lifecycle;
pub mod nursery;
pub mod operations;

pub use operations::GreenhouseService;
