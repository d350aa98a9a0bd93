pub mod commands;
pub mod http;
pub mod repository;
pub mod runtime;
pub mod site;
pub mod view;
