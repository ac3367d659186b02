use std::path::PathBuf;

use lexiphone_core::{LoadOptions, TextEncoding};
use serde::{Deserialize, Serialize};

fn default_keep_ambiguous() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary file; must be given here or on the command line
    pub path: Option<PathBuf>,
    #[serde(default = "default_keep_ambiguous")]
    pub keep_ambiguous: bool,
    #[serde(default)]
    pub encoding: TextEncoding,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            keep_ambiguous: default_keep_ambiguous(),
            encoding: TextEncoding::default(),
        }
    }
}

impl DictionaryConfig {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::default()
            .keep_ambiguous(self.keep_ambiguous)
            .encoding(self.encoding)
    }
}
