pub mod build;
pub mod init;
pub mod scan;
pub mod sessions;

pub use build::present_build_result;
pub use init::present_init_result;
pub use scan::present_scan_result;
pub use sessions::present_session_list;

/// Commands suggested in tips.
pub(crate) mod cmd {
    pub const BUILD: &str = "pxgallery build";
    pub const SESSIONS: &str = "pxgallery sessions";
    pub const SCAN: &str = "pxgallery scan";
}
