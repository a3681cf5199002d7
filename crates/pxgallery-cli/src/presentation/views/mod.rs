pub mod build;
pub mod init;
pub mod scan;
pub mod sessions;

pub use build::BuildResultView;
pub use init::InitResultView;
pub use scan::ScanResultView;
pub use sessions::SessionListView;
