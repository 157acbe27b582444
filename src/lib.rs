// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;

pub mod cli;
pub mod dispatch;
pub mod form;
pub mod gui;
pub mod net;
pub mod progress;
pub mod worker;

pub use error::{GridError, GridResult};
