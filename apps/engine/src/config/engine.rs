//! Engine configuration loaded from the environment.
//!
//! | variable | default |
//! | --- | --- |
//! | `ENGINE_BOT_ITERATION_CAP` | 128 |
//! | `ENGINE_PASS_OVERRIDES` | 1 |
//! | `ENGINE_BOT_POLICY` | `Baseline` |

use std::env;
use std::str::FromStr;

use crate::ai;
use crate::domain::rules::DEFAULT_PASS_OVERRIDES;
use crate::errors::domain::DomainError;

pub const DEFAULT_BOT_ITERATION_CAP: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Bot decisions allowed after a single external intent.
    pub bot_iteration_cap: usize,
    /// Pass-override tokens per player at match creation.
    pub pass_overrides: u8,
    /// Registry name of the policy driving automated seats.
    pub bot_policy: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bot_iteration_cap: DEFAULT_BOT_ITERATION_CAP,
            pass_overrides: DEFAULT_PASS_OVERRIDES,
            bot_policy: ai::Baseline::NAME.to_string(),
        }
    }
}

impl EngineConfig {
    /// Read overrides from the environment; unset variables keep defaults.
    pub fn from_env() -> Result<Self, DomainError> {
        let defaults = Self::default();
        let bot_iteration_cap =
            parse_var("ENGINE_BOT_ITERATION_CAP")?.unwrap_or(defaults.bot_iteration_cap);
        if bot_iteration_cap == 0 {
            return Err(DomainError::config(
                "ENGINE_BOT_ITERATION_CAP must be at least 1",
            ));
        }
        let pass_overrides =
            parse_var("ENGINE_PASS_OVERRIDES")?.unwrap_or(defaults.pass_overrides);

        let bot_policy = match env::var("ENGINE_BOT_POLICY") {
            Ok(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => defaults.bot_policy,
        };
        if ai::by_name(&bot_policy).is_none() {
            return Err(DomainError::config(format!(
                "ENGINE_BOT_POLICY names unknown policy '{bot_policy}'"
            )));
        }

        Ok(Self {
            bot_iteration_cap,
            pass_overrides,
            bot_policy,
        })
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, DomainError> {
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| DomainError::config(format!("{name} has invalid value '{trimmed}'")))
}
