//! Background Tasks Module
//!
//! Periodic maintenance tasks that run alongside foreground store use.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
