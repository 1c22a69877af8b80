//! Process-wide rendering settings.
//!
//! Settings are read once from the environment, the first time an assertion
//! renders a failure:
//!
//! - `ASSERT_THAT_MAX_PATH_LEN`: longest subject path shown before it is
//!   shortened at a field separator (default 60).
//! - `ASSERT_THAT_MAX_VALUE_LEN`: longest rendered actual/expected value, in
//!   characters, before it is cut with `...` (default 512).

use lazy_static::lazy_static;

pub const MAX_PATH_LEN_VAR: &str = "ASSERT_THAT_MAX_PATH_LEN";
pub const MAX_VALUE_LEN_VAR: &str = "ASSERT_THAT_MAX_VALUE_LEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_path_len: usize,
    pub max_value_len: usize,
}

impl Config {
    pub const DEFAULT_MAX_PATH_LEN: usize = 60;
    pub const DEFAULT_MAX_VALUE_LEN: usize = 512;

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source.
    ///
    /// Missing, unparsable or zero values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            max_path_len: read_len(&lookup, MAX_PATH_LEN_VAR, Self::DEFAULT_MAX_PATH_LEN),
            max_value_len: read_len(&lookup, MAX_VALUE_LEN_VAR, Self::DEFAULT_MAX_VALUE_LEN),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_path_len: Self::DEFAULT_MAX_PATH_LEN,
            max_value_len: Self::DEFAULT_MAX_VALUE_LEN,
        }
    }
}

fn read_len(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: usize) -> usize {
    let Some(raw) = lookup(name) else {
        return default;
    };
    match raw.trim().parse::<usize>() {
        Ok(len) if len > 0 => len,
        _ => {
            tracing::warn!(variable = name, value = %raw, default, "ignoring invalid setting");
            default
        }
    }
}

lazy_static! {
    static ref CONFIG: Config = Config::from_env();
}

/// The settings in effect for this process.
pub fn get() -> &'static Config {
    &CONFIG
}
