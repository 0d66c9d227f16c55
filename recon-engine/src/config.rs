//! Engine configuration
//!
//! # 环境变量
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | TIMEZONE | Europe/Madrid | 业务时区 |

use chrono_tz::Tz;

/// Engine configuration
///
/// The business timezone governs trading-date boundaries for aggregation
/// windows and the "today" used by the reopen next-date proposal.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub timezone: Tz,
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let timezone = std::env::var("TIMEZONE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(chrono_tz::Europe::Madrid);
        Self { timezone }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Europe::Madrid,
        }
    }
}
