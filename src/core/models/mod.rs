//! Data models for `credit-bridge`

pub mod course;
pub mod session;

pub use course::Course;
pub use session::{Session, SessionData};
