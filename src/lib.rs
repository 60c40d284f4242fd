pub mod application;
pub mod aur;
pub mod commands;
pub mod http;
pub mod runtime;
pub mod store;
pub mod tools;
