//! Derived views over store snapshots
//!
//! Pure functions: they only read the slices they are given.

pub mod board;
pub mod calendar;
pub mod dashboard;
pub mod filters;

pub use board::{group_by_status, StatusBoard};
pub use calendar::{group_by_day, month_grid_range, week_range};
pub use dashboard::{dashboard, Dashboard, DashboardStats};
