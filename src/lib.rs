pub mod backend;
pub mod config;
pub mod echo;
pub mod form;
pub mod handler;
pub mod page;
