//! Client for the legacy NHL stats API (`statsapi.web.nhl.com/api/v1`).
//!
//! Covers the four read-only endpoints the roster dashboard consumes:
//! the team directory, a team's roster, a player's profile, and a player's
//! single-season statistics.

mod client;
mod error;
mod models;

pub use client::{Client, DEFAULT_BASE_URL};
pub use error::StatsApiError;
pub use models::{
    PlayerInfo, Person, Position, PositionAbbrev, RosterEntry, SkaterStat, StatSplit, Team,
};
