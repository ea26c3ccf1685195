use serde::Deserialize;

/// Word list location. The built-in ship list is used when `path` is unset.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CorpusConfig {
    pub path: Option<String>,
}
