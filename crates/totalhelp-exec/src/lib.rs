pub mod platform;
pub mod process;

pub use platform::open_in_browser;
pub use process::{run_captured, Captured, ExecError};
