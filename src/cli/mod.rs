//! CLI command implementations

pub mod create;
pub mod init;
pub mod list;
pub mod paths;
pub mod serve;
pub mod strip;
