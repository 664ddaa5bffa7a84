use std::time::Duration;
use tracing::Level;

const DEFAULT_HEADING_REVEAL_DELAY_MS: u64 = 1_250;
const DEFAULT_PORTRAIT_REVEAL_DELAY_MS: u64 = 1_200;
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

const REVEAL_DELAY_MS_BOUNDS: (u64, u64) = (100, 10_000);

/// Settings baked in at compile time. Overrides come from the build
/// environment (`PORTFOLIO_*` variables visible to `rustc`), never from the
/// browser at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub heading_reveal_delay: Duration,
    pub portrait_reveal_delay: Duration,
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            heading_reveal_delay: Duration::from_millis(DEFAULT_HEADING_REVEAL_DELAY_MS),
            portrait_reveal_delay: Duration::from_millis(DEFAULT_PORTRAIT_REVEAL_DELAY_MS),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_HEADING_REVEAL_DELAY_MS"),
            option_env!("PORTFOLIO_PORTRAIT_REVEAL_DELAY_MS"),
            option_env!("PORTFOLIO_LOG_LEVEL"),
        )
    }

    fn from_values(
        heading_delay_ms: Option<&str>,
        portrait_delay_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let heading_delay_ms = parse_u64_with_bounds(
            heading_delay_ms,
            DEFAULT_HEADING_REVEAL_DELAY_MS,
            REVEAL_DELAY_MS_BOUNDS,
        );
        let portrait_delay_ms = parse_u64_with_bounds(
            portrait_delay_ms,
            DEFAULT_PORTRAIT_REVEAL_DELAY_MS,
            REVEAL_DELAY_MS_BOUNDS,
        );
        let log_level = parse_log_level(log_level).unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            heading_reveal_delay: Duration::from_millis(heading_delay_ms),
            portrait_reveal_delay: Duration::from_millis(portrait_delay_ms),
            log_level,
        }
    }
}

fn parse_u64_with_bounds(raw: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(raw: Option<&str>) -> Option<Level> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<Level>().ok())
}
