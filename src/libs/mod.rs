//! Core library modules for streakr.
//!
//! - **Streak accounting**: [`streak`] turns periodic usage samples into daily
//!   totals and streaks
//! - **Activity detection**: [`activity`] decides whether the user is at the
//!   keyboard
//! - **Tracking loop**: [`tracker`] drives both on a timer with [`probe`]
//! - **Infrastructure**: configuration, storage, errors, messages and tables

pub mod activity;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod probe;
pub mod streak;
pub mod tracker;
pub mod view;
