use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// Value of `fallbackType` that selects the WebView fallback.
pub const WEBVIEW_FALLBACK: &str = "webview";

/// The project manifest fields consumed during feature resolution.
///
/// Mirrors the camelCase layout of `twa-manifest.json`. Keys this crate does not
/// use (package id, icons, colors...) are ignored when parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwaManifest {
    #[serde(default)]
    pub features: FeaturesConfig,
    /// Rendering strategy used when the browser lacks Trusted Web Activity support.
    /// Compared verbatim, so unknown values are kept as-is.
    #[serde(default = "default_fallback_type")]
    pub fallback_type: String,
}

fn default_fallback_type() -> String {
    FallbackType::CustomTabs.as_str().to_string()
}

impl Default for TwaManifest {
    fn default() -> Self {
        Self {
            features: FeaturesConfig::default(),
            fallback_type: default_fallback_type(),
        }
    }
}

impl TwaManifest {
    /// Parse a manifest from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded manifest from {}", path.display());
        Self::from_json(&content)
    }

    /// The known fallback strategy, if `fallback_type` names one.
    pub fn fallback(&self) -> Option<FallbackType> {
        FallbackType::from_str(&self.fallback_type)
    }

    pub fn uses_webview_fallback(&self) -> bool {
        self.fallback_type == WEBVIEW_FALLBACK
    }
}

/// Known fallback strategies.
///
/// - `CustomTabs`: open the site in a Custom Tab (the default)
/// - `WebView`: render inside an embedded WebView
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackType {
    CustomTabs,
    WebView,
}

impl FallbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CustomTabs => "customtabs",
            Self::WebView => WEBVIEW_FALLBACK,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "customtabs" => Some(Self::CustomTabs),
            WEBVIEW_FALLBACK => Some(Self::WebView),
            _ => None,
        }
    }
}

/// Optional integrations, each enabled by the presence of its key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps_flyer: Option<AppsFlyerConfig>,
}

/// Settings for the AppsFlyer analytics integration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppsFlyerConfig {
    /// Informational only; the integration is enabled by the config being present.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// AppsFlyer dev key baked into the application class.
    #[serde(default, alias = "devKey")]
    pub apps_flyer_id: String,
}

fn default_true() -> bool {
    true
}

impl AppsFlyerConfig {
    pub fn new(apps_flyer_id: impl Into<String>) -> Self {
        Self {
            enabled: true,
            apps_flyer_id: apps_flyer_id.into(),
        }
    }
}
