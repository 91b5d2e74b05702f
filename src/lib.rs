//! Cost & Reward Allocation Engine
//!
//! This crate turns an in-memory snapshot of an operations dataset (members,
//! projects, staffing allocations, logged time, monthly operating expenses)
//! into per-member performance records, per-project settlement figures, and a
//! proportional profit-sharing distribution between the company and the
//! members who worked on each project.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
