//! ascii-edge library crate.
//!
//! The conversion core lives in [`ascii`]; [`server`], [`api`] and [`cli`]
//! are the boundary layers that feed it bytes and a width.

pub mod api;
pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
