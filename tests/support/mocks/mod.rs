// tests/support/mocks/mod.rs
pub mod time;
pub mod upload;

pub use time::{StepClock, fixed_now};
pub use upload::{FailingUploader, StaticUploader};
