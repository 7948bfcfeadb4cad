pub mod book;
pub mod cancel;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod menu;
pub mod status;
