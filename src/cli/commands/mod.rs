pub mod columns;
pub mod config;
pub mod init;
pub mod label;
pub mod run;
pub mod shell;
