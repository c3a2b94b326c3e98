//! Response and request types for the monitor API

mod process;
mod terminate;
mod usage;

pub use process::*;
pub use terminate::*;
pub use usage::*;
