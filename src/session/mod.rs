mod session;

pub use session::{Session, SessionBuilder};
