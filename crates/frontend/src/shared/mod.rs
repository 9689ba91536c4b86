pub mod config;
pub mod dom;
pub mod field_validator;
pub mod notification;
pub mod renderer;
pub mod scheduler;
