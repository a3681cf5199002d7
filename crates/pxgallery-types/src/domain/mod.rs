pub mod photo;
pub mod session;

pub use photo::*;
pub use session::*;
