use serde::Deserialize;

pub const DEFAULT_SEPARATOR: &str = "-";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub separator: String,
    pub prefix: String,
    pub count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            prefix: String::new(),
            count: 1,
        }
    }
}
