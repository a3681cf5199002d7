pub mod build;
pub mod context;
pub mod init;
pub mod scan;
pub mod sessions;

pub use context::HandlerContext;
