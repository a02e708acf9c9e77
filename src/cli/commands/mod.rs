pub mod apply;
pub mod apply_all;
mod command_result;
pub mod extract;
pub mod helper;
pub mod init;
pub mod stats;

pub use command_result::*;
