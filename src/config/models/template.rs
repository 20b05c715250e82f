//! Template configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the answer page template comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory holding operator templates; the embedded page is used when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_template_name")]
    pub name: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: None,
            name: default_template_name(),
        }
    }
}

impl TemplateConfig {
    /// Full path of the template file, if a directory is configured
    pub fn path(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(&self.name))
    }
}
