pub mod api;
pub mod session;
pub mod storage;

pub use session::{restore_session, Session};
