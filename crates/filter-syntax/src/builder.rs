//! Builds filter entry sets from raw string parameters.

use crate::{ast::criterion::FilterEntry, error::Result, parser::FilterParser};
use tracing::debug;

impl FilterParser {
    /// Build an ordered entry list from `(expression, value)` pairs.
    ///
    /// Output order follows the input iterator; for unordered maps that
    /// order is implementation-defined. With `ignore_empty` set, pairs
    /// whose value is the empty string are skipped without error. Any
    /// parse failure aborts the whole build.
    pub fn build_entries<I, K, V>(&self, params: I, ignore_empty: bool) -> Result<Vec<FilterEntry>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut entries = Vec::new();
        for (expression, value) in params {
            let (expression, value) = (expression.as_ref(), value.as_ref());
            if ignore_empty && value.is_empty() {
                debug!("skipping filter '{}': empty match value", expression);
                continue;
            }
            let criterion = self.parse(expression)?;
            entries.push(FilterEntry::new(criterion, value));
        }
        Ok(entries)
    }
}

/// Select the parameters whose keys begin with `prefix` + `_`, stripping
/// that lead-in from the returned keys.
///
/// `params_starting_with(params, "filter")` turns `filter_EQS_name=bob`
/// into `("EQS_name", "bob")` and drops everything else. This is the
/// bridge from a caller's raw parameter mapping to `build_entries`.
pub fn params_starting_with<I, K, V>(params: I, prefix: &str) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let lead = format!("{prefix}_");
    params
        .into_iter()
        .filter_map(|(key, value)| {
            key.as_ref()
                .strip_prefix(&lead)
                .map(|expression| (expression.to_string(), value.as_ref().to_string()))
        })
        .collect()
}
