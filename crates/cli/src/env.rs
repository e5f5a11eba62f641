// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `GHSEED_GH` if set and non-empty.
pub fn gh_binary() -> Option<String> {
    std::env::var(vars::GHSEED_GH).ok().filter(|v| !v.is_empty())
}

/// Log filter directive: `GHSEED_LOG`, falling back to `RUST_LOG`.
pub fn log_filter() -> Option<String> {
    let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
    non_empty(vars::GHSEED_LOG).or_else(|| non_empty(vars::RUST_LOG))
}

/// Returns `true` if `GHSEED_TIMINGS` is set (any value).
pub fn timings() -> bool {
    std::env::var(vars::GHSEED_TIMINGS).is_ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
