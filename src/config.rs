//! Configuration snapshot built from environment variables.
//!
//! Reads `NODE_ENV`, `PORT`, `DATABASE_URL` and `REDIS_URL` once at startup
//! and resolves them into an immutable [`Config`]. Loading never fails:
//! anything missing or malformed degrades to a documented default, and the
//! optional connection strings simply stay `None`.

use std::{collections::HashMap, env};

/// Environment label used when `NODE_ENV` is unset or empty.
const DEFAULT_ENV_MODE: &str = "development";

/// Listen port used when `PORT` is unset or unparseable.
const DEFAULT_PORT: u16 = 3000;

/// Fully-resolved runtime configuration.
///
/// Built once at startup and passed by reference to consumers; no field is
/// ever mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Free-form environment label, e.g. `"development"` or `"production"`.
    pub env_mode: String,
    /// Port for whatever listener the application mounts on top.
    pub port: u16,
    /// Database connection string, if one was supplied.
    pub database_url: Option<String>,
    /// Cache connection string, if one was supplied.
    pub redis_url: Option<String>,
}

impl Config {
    /// Build a snapshot from the real process environment.
    ///
    /// Call once at startup; repeated calls are side-effect-free and yield
    /// equal snapshots for an unchanged environment.
    pub fn from_env() -> Self {
        Self::build(&env::vars().collect())
    }

    /// Build a snapshot from an explicit name/value mapping.
    ///
    /// Total over any input — there is no error path. Tests pass a map
    /// directly instead of mutating process env vars.
    pub fn build(vars: &HashMap<String, String>) -> Self {
        let env_mode = match vars.get("NODE_ENV") {
            Some(v) if !v.is_empty() => v.clone(),
            _ => DEFAULT_ENV_MODE.to_string(),
        };

        let port = vars
            .get("PORT")
            .and_then(|v| scan_decimal(v))
            .and_then(|n| u16::try_from(n).ok())
            .unwrap_or(DEFAULT_PORT);

        Config {
            env_mode,
            port,
            database_url: vars.get("DATABASE_URL").cloned(),
            redis_url: vars.get("REDIS_URL").cloned(),
        }
    }
}

/// Scan a leading base-10 integer: skips leading whitespace, accepts an
/// optional sign, stops at the first non-digit. `None` when no digits are
/// found at all.
fn scan_decimal(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let mut n: i64 = 0;
    let mut seen = false;
    for c in s.chars() {
        let Some(d) = c.to_digit(10) else { break };
        seen = true;
        // Saturate on absurd digit runs; the caller's range check turns
        // saturation into the default anyway.
        n = n.saturating_mul(10).saturating_add(i64::from(d));
    }
    if !seen {
        return None;
    }
    Some(if negative { -n } else { n })
}
