pub mod session_repository;

pub use session_repository::{InMemorySessionStore, SessionStore, TEST_ID_KEY};
#[cfg(test)]
pub use session_repository::MockSessionStore;
