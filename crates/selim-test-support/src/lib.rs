//! Shared test fakes and fixtures for the Selim narrative adventure.

mod clock;
pub mod fixtures;
mod render;
mod scheduler;

pub use clock::{FixedClock, fixed_clock};
pub use render::{DrawCall, RecordingRenderer};
pub use scheduler::ManualScheduler;
