//! Porcelain commands
//!
//! - `init`: create the repository layout
//! - `add`: stage files and directories
//! - `commit`: fold the staged files into a commit
//! - `status`: list staged artifacts
//! - `log`: show the commits made in this process
//! - `session`: run several commands against one repository

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod session;
pub mod status;
