//! Background Tasks Module
//!
//! # Tasks
//! - Cache sweeper: removes expired cache entries on a fixed period

mod sweeper;

pub use sweeper::spawn_sweeper_task;
