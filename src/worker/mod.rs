//! The icebreaker pipeline: generate, deliver, and the runner that sequences them

pub mod deliver;
pub mod generate;
pub mod handler;

// Re-export the main entry points for convenience
pub use deliver::deliver_icebreaker;
pub use generate::generate_icebreaker;
pub use handler::{RunState, RunStatus, Runner};
