pub mod cancel;
pub mod process;

pub use cancel::{CancelProbe, FlagCancelProbe};
pub use process::{ProcessFailure, ProcessRunner, SystemProcessRunner};
