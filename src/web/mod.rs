//! Web dashboard module for TACBOARD
//!
//! Serves the leaderboard as a single-page dashboard backed by a small
//! JSON API, with on-demand refresh of the scores document.

mod handlers;
mod server;
mod state;

pub use server::start_server;
pub use state::{DashboardState, LoadedScores};
