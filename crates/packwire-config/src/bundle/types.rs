use serde::{Deserialize, Serialize};

/// Source map policy handed to the bundler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Devtool {
    /// Full source map in a separate `.map` file
    #[default]
    #[serde(rename = "source-map")]
    SourceMap,
}

impl Devtool {
    pub fn as_str(self) -> &'static str {
        match self {
            Devtool::SourceMap => "source-map",
        }
    }
}
