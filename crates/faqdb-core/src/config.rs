//! Layered configuration loader and path helpers.
//!
//! Uses Figment to merge `faqdb.toml` + `faqdb.<env>.toml` + `FAQDB_*` env vars
//! (`__` separates nested keys, e.g. `FAQDB_SEARCH__MAX_RESULTS`).

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::options::{SearchOptions, SearchOptionsOverrides};
use crate::types::Facet;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

pub struct Config {
    figment: Figment,
}

impl Config {
    /// Load from `dir`, picking the environment file from `RUST_ENV`
    /// (default `dev`).
    pub fn load_from(dir: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_from_dir(dir, &env_name)
    }

    /// Load `faqdb.toml` and the matching per-environment file from `dir`.
    /// Missing files are skipped.
    pub fn load_from_dir(dir: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::file(dir.join("faqdb.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("faqdb.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("faqdb.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("faqdb.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("FAQDB_").split("__"));

        let config = Self { figment };
        config.validate()?;
        tracing::debug!(env = env_name, dir = %dir.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml_str(toml: &str) -> anyhow::Result<Self> {
        let config = Self { figment: Figment::from(Toml::string(toml)) };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Like [`Config::get`], but an absent key is `Ok(None)`.
    pub fn find<T>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        if self.figment.contains(key) {
            self.get(key).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Default options with the `search` table applied on top.
    pub fn search_options(&self) -> anyhow::Result<SearchOptions> {
        let overrides: SearchOptionsOverrides = self.find("search")?.unwrap_or_default();
        let options = SearchOptions::default().merge(&overrides);
        options.validate()?;
        Ok(options)
    }

    pub fn debounce(&self) -> anyhow::Result<Duration> {
        let ms = self.find::<u64>("session.debounce_ms")?.unwrap_or(DEFAULT_DEBOUNCE_MS);
        Ok(Duration::from_millis(ms))
    }

    /// `data.records_path`, expanded and resolved against `base`.
    pub fn records_path(&self, base: &Path) -> anyhow::Result<Option<PathBuf>> {
        Ok(self
            .find::<String>("data.records_path")?
            .map(|p| resolve_with_base(base, p)))
    }

    /// Caller-controlled facets from `facets.custom`. Labels default to the
    /// built-in table when omitted.
    pub fn custom_facets(&self) -> anyhow::Result<Option<Vec<Facet>>> {
        #[derive(serde::Deserialize)]
        struct RawFacet {
            key: String,
            label: Option<String>,
            #[serde(default)]
            count: usize,
        }

        let raw: Option<Vec<RawFacet>> = self.find("facets.custom")?;
        Ok(raw.map(|facets| {
            facets
                .into_iter()
                .map(|f| match f.label {
                    Some(label) => Facet { key: f.key, label, count: f.count },
                    None => Facet::new(f.key, f.count),
                })
                .collect()
        }))
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.search_options()?;
        Ok(())
    }
}

/// Expand `~` and `${VAR}`/`$VAR` in a user-supplied path. Unknown variables
/// are left untouched; the result is not canonicalized.
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let raw = input.as_ref();
    let with_env = shellexpand::env(raw).unwrap_or(std::borrow::Cow::Borrowed(raw));
    PathBuf::from(shellexpand::tilde(&with_env).as_ref())
}

/// Expand `p` and join it onto `base` unless it is already absolute.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
