pub mod config;
pub mod doctor;
pub mod format;
pub mod helper;
pub mod logging;
pub mod player;
pub mod runner;
pub mod server;
