//! Merging of feature contributions into a single project descriptor.

mod apps_flyer;

pub use apps_flyer::*;

use indexmap::IndexSet;
use serde::Serialize;

use crate::models::{Feature, TwaManifest};

/// Permission the WebView fallback needs to load the site.
pub const INTERNET_PERMISSION: &str = "android.permission.INTERNET";

/// Accumulated `build.gradle` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildGroup {
    pub repositories: IndexSet<String>,
    pub dependencies: IndexSet<String>,
}

/// Accumulated `AndroidManifest.xml` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidManifestGroup {
    pub permissions: IndexSet<String>,
    pub components: Vec<String>,
}

/// Accumulated application class code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationClassGroup {
    pub imports: IndexSet<String>,
    pub variables: Vec<String>,
    /// One snippet per feature that supplied one, in merge order.
    pub on_create: Vec<String>,
}

/// Accumulated launcher activity code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherActivityGroup {
    pub imports: IndexSet<String>,
    /// One snippet per feature that supplied one, in merge order.
    pub launch_url: Vec<String>,
}

/// Merged contributions of every enabled feature.
///
/// Set-like groups deduplicate by value and keep first-insertion order; list-like
/// groups keep every entry in merge order. Nothing is ever removed, so the manager
/// is filled during construction (plus any explicit [`add_feature`] calls) and then
/// read by the project generator.
///
/// [`add_feature`]: FeatureManager::add_feature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureManager {
    pub build: BuildGroup,
    pub android_manifest: AndroidManifestGroup,
    pub application_class: ApplicationClassGroup,
    pub launcher_activity: LauncherActivityGroup,
}

impl FeatureManager {
    /// Resolve the features enabled by `manifest` and merge them.
    pub fn new(manifest: &TwaManifest) -> Self {
        let mut manager = Self::default();

        for feature in enabled_features(manifest) {
            manager.add_feature(&feature);
        }

        // Not a feature: the WebView fallback itself needs network access.
        if manifest.uses_webview_fallback() {
            tracing::debug!("WebView fallback selected, adding {}", INTERNET_PERMISSION);
            manager
                .android_manifest
                .permissions
                .insert(INTERNET_PERMISSION.to_string());
        }

        manager
    }

    /// Merge a feature's contributions into the accumulated groups.
    pub fn add_feature(&mut self, feature: &Feature) {
        tracing::debug!("Adding feature '{}'", feature.name);

        self.build
            .repositories
            .extend(feature.build.repositories.iter().cloned());
        self.build
            .dependencies
            .extend(feature.build.dependencies.iter().cloned());

        self.application_class
            .imports
            .extend(feature.application.imports.iter().cloned());
        self.application_class
            .variables
            .extend(feature.application.variables.iter().cloned());
        if let Some(on_create) = non_empty(&feature.application.on_create) {
            self.application_class.on_create.push(on_create.to_string());
        }

        self.android_manifest
            .permissions
            .extend(feature.android_manifest.permissions.iter().cloned());
        self.android_manifest
            .components
            .extend(feature.android_manifest.components.iter().cloned());

        self.launcher_activity
            .imports
            .extend(feature.launcher_activity.imports.iter().cloned());
        if let Some(launch_url) = non_empty(&feature.launcher_activity.launch_url) {
            self.launcher_activity.launch_url.push(launch_url.to_string());
        }
    }

    /// Fold form of [`add_feature`](Self::add_feature).
    pub fn with_feature(mut self, feature: &Feature) -> Self {
        self.add_feature(feature);
        self
    }

    /// True when no group holds any entry.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl<'a> Extend<&'a Feature> for FeatureManager {
    fn extend<I: IntoIterator<Item = &'a Feature>>(&mut self, iter: I) {
        for feature in iter {
            self.add_feature(feature);
        }
    }
}

fn non_empty(snippet: &Option<String>) -> Option<&str> {
    snippet.as_deref().filter(|s| !s.is_empty())
}

/// Integrations known to the generator, keyed by their manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownFeature {
    AppsFlyer,
}

impl KnownFeature {
    pub const ALL: [KnownFeature; 1] = [KnownFeature::AppsFlyer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppsFlyer => APPS_FLYER_FEATURE_NAME,
        }
    }

    /// Build this feature if the manifest configures it.
    pub fn resolve(&self, manifest: &TwaManifest) -> Option<Feature> {
        match self {
            Self::AppsFlyer => manifest.features.apps_flyer.as_ref().map(apps_flyer_feature),
        }
    }
}

/// Every known feature the manifest enables, in a fixed order.
pub fn enabled_features(manifest: &TwaManifest) -> Vec<Feature> {
    KnownFeature::ALL
        .iter()
        .filter_map(|known| known.resolve(manifest))
        .collect()
}
