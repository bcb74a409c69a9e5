//! Text fragments for the generated project files.
//!
//! Each function renders one accumulated group into the snippet a project template
//! would splice into the corresponding file. Empty groups render as empty strings.

use crate::features::{
    AndroidManifestGroup, ApplicationClassGroup, BuildGroup, FeatureManager,
    LauncherActivityGroup,
};

const INDENT: &str = "    ";

/// Which generated file a fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Build,
    Manifest,
    Application,
    Launcher,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Build,
        Section::Manifest,
        Section::Application,
        Section::Launcher,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Manifest => "manifest",
            Self::Application => "application",
            Self::Launcher => "launcher",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "build" => Some(Self::Build),
            "manifest" => Some(Self::Manifest),
            "application" => Some(Self::Application),
            "launcher" => Some(Self::Launcher),
            _ => None,
        }
    }

    /// File the fragment is written into.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Build => "app/build.gradle",
            Self::Manifest => "app/src/main/AndroidManifest.xml",
            Self::Application => "Application.java",
            Self::Launcher => "LauncherActivity.java",
        }
    }
}

/// Render a single section of the manager.
pub fn render_section(manager: &FeatureManager, section: Section) -> String {
    match section {
        Section::Build => build_gradle(&manager.build),
        Section::Manifest => android_manifest(&manager.android_manifest),
        Section::Application => application_class(&manager.application_class),
        Section::Launcher => launcher_activity(&manager.launcher_activity),
    }
}

/// Render every section, each under a `// <file>` header.
///
/// Example output:
/// ```text
/// // app/build.gradle
/// repositories {
///     mavenCentral()
/// }
/// ...
/// ```
pub fn render_all(manager: &FeatureManager) -> String {
    let mut output = String::new();
    for section in Section::ALL {
        output.push_str("// ");
        output.push_str(section.file_name());
        output.push('\n');
        output.push_str(&render_section(manager, section));
        output.push('\n');
    }
    output
}

/// `repositories { }` and `dependencies { }` blocks for `build.gradle`.
pub fn build_gradle(build: &BuildGroup) -> String {
    let mut output = String::new();
    if !build.repositories.is_empty() {
        output.push_str("repositories {\n");
        for repo in &build.repositories {
            push_line(&mut output, INDENT, repo);
        }
        output.push_str("}\n");
    }
    if !build.dependencies.is_empty() {
        output.push_str("dependencies {\n");
        for dep in &build.dependencies {
            push_line(&mut output, INDENT, &format!("implementation '{}'", dep));
        }
        output.push_str("}\n");
    }
    output
}

/// `<uses-permission>` lines followed by raw component declarations.
pub fn android_manifest(manifest: &AndroidManifestGroup) -> String {
    let mut output = String::new();
    for permission in &manifest.permissions {
        output.push_str(&format!(
            "<uses-permission android:name=\"{}\"/>\n",
            permission
        ));
    }
    for component in &manifest.components {
        push_block(&mut output, "", component);
    }
    output
}

/// Imports, fields and the `onCreate()` additions of the application class.
pub fn application_class(app: &ApplicationClassGroup) -> String {
    let mut output = String::new();
    push_imports(&mut output, app.imports.iter());
    for variable in &app.variables {
        push_line(&mut output, "", variable);
    }
    if !app.on_create.is_empty() {
        output.push_str("public void onCreate() {\n");
        push_line(&mut output, INDENT, "super.onCreate();");
        for snippet in &app.on_create {
            push_block(&mut output, INDENT, snippet);
        }
        output.push_str("}\n");
    }
    output
}

/// Imports and `getLaunchingUrl()` additions of the launcher activity.
pub fn launcher_activity(launcher: &LauncherActivityGroup) -> String {
    let mut output = String::new();
    push_imports(&mut output, launcher.imports.iter());
    for snippet in &launcher.launch_url {
        push_block(&mut output, "", snippet);
    }
    output
}

fn push_imports<'a>(output: &mut String, imports: impl Iterator<Item = &'a String>) {
    for import in imports {
        output.push_str(&format!("import {};\n", import));
    }
}

fn push_line(output: &mut String, prefix: &str, line: &str) {
    output.push_str(prefix);
    output.push_str(line);
    output.push('\n');
}

/// Push a multi-line snippet, indenting every non-blank line.
fn push_block(output: &mut String, prefix: &str, block: &str) {
    for line in block.trim_matches('\n').lines() {
        if line.trim().is_empty() {
            output.push('\n');
        } else {
            push_line(output, prefix, line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feature;

    fn manager_with(feature: Feature) -> FeatureManager {
        FeatureManager::default().with_feature(&feature)
    }

    #[test]
    fn test_empty_manager_renders_nothing() {
        let manager = FeatureManager::default();
        for section in Section::ALL {
            assert_eq!(render_section(&manager, section), "");
        }
    }

    #[test]
    fn test_build_gradle() {
        let mut feature = Feature::new("sdk");
        feature.build.repositories = vec!["mavenCentral()".into()];
        feature.build.dependencies = vec!["com.example:sdk:1.0".into()];

        let output = build_gradle(&manager_with(feature).build);
        assert_eq!(
            output,
            "repositories {\n    mavenCentral()\n}\ndependencies {\n    implementation 'com.example:sdk:1.0'\n}\n"
        );
    }

    #[test]
    fn test_android_manifest() {
        let mut feature = Feature::new("svc");
        feature.android_manifest.permissions = vec!["android.permission.INTERNET".into()];
        feature.android_manifest.components = vec!["<service\n    android:name=\".Svc\"/>".into()];

        let output = android_manifest(&manager_with(feature).android_manifest);
        assert_eq!(
            output,
            "<uses-permission android:name=\"android.permission.INTERNET\"/>\n<service\n    android:name=\".Svc\"/>\n"
        );
    }

    #[test]
    fn test_application_class_indents_on_create() {
        let mut feature = Feature::new("init");
        feature.application.imports = vec!["com.example.Sdk".into()];
        feature.application.variables = vec!["private static final int N = 1;".into()];
        feature.application.on_create = Some("Sdk.init(this);\nSdk.start();".into());

        let output = application_class(&manager_with(feature).application_class);
        assert_eq!(
            output,
            "import com.example.Sdk;\nprivate static final int N = 1;\npublic void onCreate() {\n    super.onCreate();\n    Sdk.init(this);\n    Sdk.start();\n}\n"
        );
    }

    #[test]
    fn test_launcher_activity() {
        let mut feature = Feature::new("tag");
        feature.launcher_activity.imports = vec!["com.example.Tag".into()];
        feature.launcher_activity.launch_url = Some("\nuri = Tag.apply(uri);\n".into());

        let output = launcher_activity(&manager_with(feature).launcher_activity);
        assert_eq!(output, "import com.example.Tag;\nuri = Tag.apply(uri);\n");
    }

    #[test]
    fn test_render_all_has_headers_in_order() {
        let output = render_all(&FeatureManager::default());
        assert_eq!(
            output,
            "// app/build.gradle\n\n// app/src/main/AndroidManifest.xml\n\n// Application.java\n\n// LauncherActivity.java\n\n"
        );
    }

    #[test]
    fn test_section_names_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_str(section.as_str()), Some(section));
        }
        assert_eq!(Section::from_str("gradle"), None);
    }
}
