pub mod executor;
pub mod session;

pub use executor::EchoExecutor;
pub use session::{run_line, run_session, SessionSummary};
