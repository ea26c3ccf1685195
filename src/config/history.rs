use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistoryConfig {
    pub directory: Option<String>,
    pub prefix: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            directory: None,
            prefix: "names_".to_string(),
        }
    }
}
