//! Compiled regex cache shared by `StringAssertion::matches`.
//!
//! Tests run on many threads and tend to repeat the same patterns, so
//! compiled patterns are kept for the life of the process.

use regex::Regex;
use std::collections::HashMap;
use std::sync::RwLock;

lazy_static::lazy_static! {
    static ref REGEX_CACHE: RwLock<HashMap<String, Regex>> = RwLock::new(HashMap::new());
}

/// Returns the compiled pattern, compiling and caching it on first use.
pub(crate) fn get_or_compile_regex(pattern: &str) -> Result<Regex, regex::Error> {
    {
        if let Ok(cache) = REGEX_CACHE.read() {
            if let Some(regex) = cache.get(pattern) {
                return Ok(regex.clone());
            }
        }
    }

    let regex = Regex::new(pattern)?;
    if let Ok(mut cache) = REGEX_CACHE.write() {
        cache
            .entry(pattern.to_string())
            .or_insert_with(|| regex.clone());
    }
    Ok(regex)
}

#[cfg(test)]
fn cached(pattern: &str) -> bool {
    REGEX_CACHE
        .read()
        .map(|cache| cache.contains_key(pattern))
        .unwrap_or(false)
}
