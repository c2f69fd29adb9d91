//! Command implementations for the NFL8 CLI.

pub mod deflate;
pub mod inflate;
pub mod info;

pub use deflate::cmd_deflate;
pub use inflate::cmd_inflate;
pub use info::cmd_info;
pub use test::cmd_test;
