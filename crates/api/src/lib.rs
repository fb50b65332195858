//! Worklog HTTP API: location event logging, places, tasks, journal events,
//! dashboard statistics and CSV export.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
