pub mod context;
pub mod readings;
pub mod sessions;

pub use context::ReadingContext;
pub use sessions::{ReadingSession, SessionError, SessionStore};
