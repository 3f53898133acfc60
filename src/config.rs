//! Service option handling
//!
//! Endpoint configuration for submit and upload is supplied by the host
//! application, either directly on the form definition or loaded from a JSON
//! file in the platform config directory.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// HTTP endpoint for form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOptions {
    /// Submit endpoint URL
    pub url: String,
    /// HTTP method, defaults to POST
    #[serde(default = "default_post")]
    pub method: String,
}

impl SubmitOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: default_post(),
        }
    }
}

/// HTTP endpoint for file uploads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOptions {
    /// Upload endpoint URL
    pub url: String,
    /// HTTP method, defaults to POST
    #[serde(default = "default_post")]
    pub http_method: String,
    /// Name of the request parameter carrying the file
    pub param_name: String,
    /// JSON pointer into the response body locating the stored-value string
    pub value_pointer: Option<String>,
}

impl UploadOptions {
    pub fn new(url: impl Into<String>, param_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http_method: default_post(),
            param_name: param_name.into(),
            value_pointer: None,
        }
    }
}

/// Options for the data collector
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectorOptions {
    /// Field names excluded from collected output
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Collect fields configured as hidden (off by default)
    #[serde(default)]
    pub include_hidden: bool,
}

/// Per-form service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceOptions {
    pub submit: Option<SubmitOptions>,
    pub upload: Option<UploadOptions>,
    #[serde(default)]
    pub collector: CollectorOptions,
}

fn default_post() -> String {
    "POST".to_string()
}

impl ServiceOptions {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("rs", "formwork", "formwork")
            .map(|dirs| dirs.config_dir().join("services.json"))
    }

    /// Load default service options from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let options: ServiceOptions = serde_json::from_str(&content)?;
                return Ok(options);
            }
        }

        Ok(Self::default())
    }

    /// Save service options to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}
