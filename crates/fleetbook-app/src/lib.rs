//! Application layer shared by the CLI and GUI front ends

pub mod config;
pub mod form;
pub mod logging;
pub mod repository;
pub mod service;
