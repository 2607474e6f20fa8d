//! Background Tasks Module
//!
//! Contains background tasks that run periodically during a session.
//!
//! # Tasks
//! - Cache sweep: drops responses older than a configured age

mod sweep;

pub use sweep::spawn_sweep_task;
