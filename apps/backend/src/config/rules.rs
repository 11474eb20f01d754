use std::env;
use std::str::FromStr;

use crate::domain::rules::{
    INITIAL_MIN_BET, INITIAL_PASS_BET, INITIAL_WIN_SCORE, MAX_BET, WIN_SCORE_STEP,
};
use crate::error::AppError;

pub const WIN_SCORE_VAR: &str = "FOUR_HUNDRED_WIN_SCORE";
pub const WIN_SCORE_STEP_VAR: &str = "FOUR_HUNDRED_WIN_SCORE_STEP";
pub const PASS_BET_VAR: &str = "FOUR_HUNDRED_PASS_BET";
pub const MIN_BET_VAR: &str = "FOUR_HUNDRED_MIN_BET";

/// Tunable rule parameters applied when a game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    pub initial_win_score: i32,
    /// Added to the win score when both partnerships reach it together.
    pub win_score_step: i32,
    pub initial_pass_bet: u8,
    pub initial_min_bet: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            initial_win_score: INITIAL_WIN_SCORE,
            win_score_step: WIN_SCORE_STEP,
            initial_pass_bet: INITIAL_PASS_BET,
            initial_min_bet: INITIAL_MIN_BET,
        }
    }
}

impl RulesConfig {
    /// Build from `FOUR_HUNDRED_*` environment variables; missing ones keep their defaults.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            initial_win_score: parse_var(&lookup, WIN_SCORE_VAR, defaults.initial_win_score)?,
            win_score_step: parse_var(&lookup, WIN_SCORE_STEP_VAR, defaults.win_score_step)?,
            initial_pass_bet: parse_var(&lookup, PASS_BET_VAR, defaults.initial_pass_bet)?,
            initial_min_bet: parse_var(&lookup, MIN_BET_VAR, defaults.initial_min_bet)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.initial_win_score <= 0 {
            return Err(AppError::config(format!(
                "{WIN_SCORE_VAR} must be positive, got {}",
                self.initial_win_score
            )));
        }
        if self.win_score_step <= 0 {
            return Err(AppError::config(format!(
                "{WIN_SCORE_STEP_VAR} must be positive, got {}",
                self.win_score_step
            )));
        }
        if !(1..=MAX_BET).contains(&self.initial_min_bet) {
            return Err(AppError::config(format!(
                "{MIN_BET_VAR} must be within 1..={MAX_BET}, got {}",
                self.initial_min_bet
            )));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| {
            AppError::config(format!("{key} has invalid value {raw:?}: {e}"))
        }),
    }
}
