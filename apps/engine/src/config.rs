use anyhow::{Context, Result};

/// Engine configuration. Every knob has a default; environment variables
/// override them so deployments can tune thresholds without a rebuild.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Results scoring below this (0–100 scale) are dropped from the ranking.
    pub min_score: f64,
    /// Maximum ranked results returned per matching run.
    pub result_limit: usize,
    /// Résumé text shorter than this is rejected before profile building.
    pub min_resume_chars: usize,
    /// TTL for cached candidate profiles, in minutes.
    pub profile_ttl_minutes: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_score: 20.0,
            result_limit: 50,
            min_resume_chars: 30,
            profile_ttl_minutes: 30,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Self::default();
        Ok(EngineConfig {
            min_score: env_or("MATCH_MIN_SCORE", defaults.min_score)?,
            result_limit: env_or("MATCH_RESULT_LIMIT", defaults.result_limit)?,
            min_resume_chars: env_or("MATCH_MIN_RESUME_CHARS", defaults.min_resume_chars)?,
            profile_ttl_minutes: env_or("MATCH_PROFILE_TTL_MINUTES", defaults.profile_ttl_minutes)?,
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.min_score, 20.0);
        assert_eq!(config.result_limit, 50);
        assert_eq!(config.min_resume_chars, 30);
    }

    #[test]
    fn test_env_or_falls_back_to_default() {
        std::env::remove_var("MATCH_TEST_UNSET");
        let value: f64 = env_or("MATCH_TEST_UNSET", 42.0).unwrap();
        assert_eq!(value, 42.0);
    }
}
