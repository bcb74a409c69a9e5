/// An optional integration contributing fragments to the generated project.
///
/// A feature is a plain contribution record: it never touches the project itself,
/// it only declares what it needs. The [`FeatureManager`](crate::FeatureManager)
/// folds any number of features into a single merged descriptor.
///
/// Fields that behave as sets downstream (repositories, dependencies, imports,
/// permissions) may hold duplicates here; deduplication happens on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feature {
    /// Short identifier used in logs, e.g. `appsflyer`.
    pub name: String,
    pub build: BuildContribution,
    pub application: ApplicationContribution,
    pub android_manifest: AndroidManifestContribution,
    pub launcher_activity: LauncherActivityContribution,
}

impl Feature {
    /// Create a feature with every contribution group empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Entries for the app module's `build.gradle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContribution {
    /// Repository declarations, e.g. `mavenCentral()`.
    pub repositories: Vec<String>,
    /// Dependency coordinates, e.g. `group:artifact:version`.
    pub dependencies: Vec<String>,
}

/// Code for the generated `Application` subclass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationContribution {
    pub imports: Vec<String>,
    /// Field declarations, in the order they should be emitted.
    pub variables: Vec<String>,
    /// Body appended to `onCreate()`. An empty string counts as absent.
    pub on_create: Option<String>,
}

/// Entries for `AndroidManifest.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AndroidManifestContribution {
    pub permissions: Vec<String>,
    /// Raw XML for `<application>` children such as receivers and services.
    pub components: Vec<String>,
}

/// Code for the generated launcher activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherActivityContribution {
    pub imports: Vec<String>,
    /// Statements that rewrite `uri` before launch. An empty string counts as absent.
    pub launch_url: Option<String>,
}
