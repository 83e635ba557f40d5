use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use fs_err as fs;

use crate::archetype::{Archetype, ArchetypeDetector};
use crate::cli::ProviderKind;

/// Resolution order: TOML file (explicit path, else ./siteweaver.toml if
/// present) -> environment overrides -> built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderKind,
    pub model: String,
    /// Provider base URL override; each adapter has its own default.
    pub endpoint: Option<String>,
    /// Process-wide completion spend ceiling, USD.
    pub spend_ceiling_usd: f64,
    /// Flat per-call charge booked before dispatch. A stand-in figure, not
    /// vendor pricing: no token counts exist before the call goes out.
    pub estimated_call_cost_usd: f64,
    pub timeout_secs: u64,
    /// Keyword overrides per snake_case archetype name; empty means the
    /// built-in sets.
    pub archetype_keywords: BTreeMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::OpenAI,
            model: "gpt-4.1-mini".into(),
            endpoint: None,
            spend_ceiling_usd: 5.0,
            estimated_call_cost_usd: 0.02,
            timeout_secs: 120,
            archetype_keywords: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => {
                let raw = fs::read_to_string(p)?;
                toml::from_str(&raw).with_context(|| format!("parse config {}", p.display()))?
            }
            None => {
                let well_known = Path::new("siteweaver.toml");
                if well_known.exists() {
                    let raw = fs::read_to_string(well_known)?;
                    toml::from_str(&raw).context("parse config siteweaver.toml")?
                } else {
                    Config::default()
                }
            }
        };
        cfg.apply_env_overrides();
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        env_override("SITEWEAVER_CEILING_USD", &mut self.spend_ceiling_usd);
        env_override("SITEWEAVER_CALL_COST_USD", &mut self.estimated_call_cost_usd);
        env_override("SITEWEAVER_TIMEOUT_SECS", &mut self.timeout_secs);
        env_override("SITEWEAVER_MODEL", &mut self.model);
        if let Ok(v) = std::env::var("SITEWEAVER_ENDPOINT") {
            if !v.is_empty() {
                self.endpoint = Some(v);
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.spend_ceiling_usd <= 0.0 {
            bail!("spend_ceiling_usd must be positive");
        }
        if self.estimated_call_cost_usd < 0.0 {
            bail!("estimated_call_cost_usd must not be negative");
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be positive");
        }
        for key in self.archetype_keywords.keys() {
            if Archetype::from_str(key).is_err() {
                bail!("unknown archetype '{key}' in archetype_keywords");
            }
        }
        Ok(())
    }

    /// Detector honoring `[archetype_keywords]`; built-in sets otherwise.
    pub fn detector(&self) -> ArchetypeDetector {
        ArchetypeDetector::with_overrides(&self.archetype_keywords)
    }
}

fn env_override<T: FromStr>(var: &str, target: &mut T) {
    if let Ok(raw) = std::env::var(var) {
        if let Ok(parsed) = raw.parse::<T>() {
            *target = parsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_sane() {
        let cfg = Config::default();
        assert!(cfg.spend_ceiling_usd > 0.0);
        assert!(cfg.estimated_call_cost_usd < cfg.spend_ceiling_usd);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str("spend_ceiling_usd = 12.5\n").unwrap();
        assert!((cfg.spend_ceiling_usd - 12.5).abs() < 1e-9);
        assert_eq!(cfg.timeout_secs, Config::default().timeout_secs);
        assert_eq!(cfg.model, Config::default().model);
    }

    #[test]
    fn test_load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "model = \"test-model\"").unwrap();
        writeln!(f, "timeout_secs = 7").unwrap();
        writeln!(f, "[archetype_keywords]").unwrap();
        writeln!(f, "blog = [\"diary\"]").unwrap();
        let cfg = Config::load(Some(f.path())).unwrap();
        assert_eq!(cfg.model, "test-model");
        assert_eq!(cfg.timeout_secs, 7);
        assert_eq!(cfg.archetype_keywords["blog"], vec!["diary".to_string()]);
    }

    #[test]
    fn test_unknown_archetype_key_rejected() {
        let cfg: Config = toml::from_str("[archetype_keywords]\nspaceship = [\"rocket\"]\n").unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_ceiling_rejected() {
        let mut cfg = Config::default();
        cfg.spend_ceiling_usd = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_env_override_parses_typed_values() {
        std::env::set_var("SITEWEAVER_TEST_TIMEOUT", "33");
        let mut timeout: u64 = 120;
        env_override("SITEWEAVER_TEST_TIMEOUT", &mut timeout);
        assert_eq!(timeout, 33);

        // Unparseable values leave the target alone.
        std::env::set_var("SITEWEAVER_TEST_TIMEOUT", "not-a-number");
        env_override("SITEWEAVER_TEST_TIMEOUT", &mut timeout);
        assert_eq!(timeout, 33);
        std::env::remove_var("SITEWEAVER_TEST_TIMEOUT");
    }
}
