//! Porcelain commands (user-facing operations)
//!
//! - `init`: Create the repository skeleton the object database lives in

pub mod init;
