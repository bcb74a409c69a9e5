use std::io::Write;

use speculate2::speculate;
use tempfile::NamedTempFile;
use twa_features::models::*;
use twa_features::render::{self, Section};
use twa_features::{FeatureManager, ManifestError};

fn write_manifest(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write manifest");
    file
}

speculate! {
    describe "TwaManifest::load" {
        it "reads a full twa-manifest.json" {
            let file = write_manifest(r#"{
                "packageId": "com.example.twa",
                "host": "example.com",
                "name": "Example",
                "fallbackType": "webview",
                "features": {
                    "appsFlyer": { "enabled": true, "appsFlyerId": "dev-key" }
                }
            }"#);

            let manifest = TwaManifest::load(file.path()).expect("Failed to load manifest");

            assert_eq!(manifest.fallback(), Some(FallbackType::WebView));
            assert_eq!(manifest.features.apps_flyer, Some(AppsFlyerConfig::new("dev-key")));
        }

        it "reports a missing file as an io error" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("twa-manifest.json");

            let result = TwaManifest::load(&path);

            match result {
                Err(ManifestError::Io { path: reported, .. }) => assert_eq!(reported, path),
                other => panic!("expected io error, got {:?}", other),
            }
        }

        it "reports invalid json as a parse error" {
            let file = write_manifest("{\"features\": ");

            let result = TwaManifest::load(file.path());

            assert!(matches!(result, Err(ManifestError::Parse(_))));
        }
    }

    describe "rendering a loaded manifest" {
        it "renders apps flyer into every section" {
            let file = write_manifest(r#"{"features": {"appsFlyer": {"appsFlyerId": "k"}}}"#);
            let manifest = TwaManifest::load(file.path()).expect("Failed to load manifest");
            let manager = FeatureManager::new(&manifest);

            let build = render::render_section(&manager, Section::Build);
            assert!(build.contains("implementation 'com.appsflyer:af-android-sdk:5.4.0'"));
            assert!(build.contains("    mavenCentral()\n"));

            let android_manifest = render::render_section(&manager, Section::Manifest);
            assert!(android_manifest.contains("<uses-permission android:name=\"android.permission.INTERNET\"/>"));
            assert!(android_manifest.contains("com.appsflyer.SingleInstallBroadcastReceiver"));

            let application = render::render_section(&manager, Section::Application);
            assert!(application.contains("import com.appsflyer.AppsFlyerLib;"));
            assert!(application.contains("AF_DEV_KEY = \"k\";"));
            assert!(application.contains("    AppsFlyerLib.getInstance().startTracking(this);"));

            let launcher = render::render_section(&manager, Section::Launcher);
            assert!(launcher.contains("appendQueryParameter(\"appsflyer_id\", appsFlyerId)"));
        }

        it "renders only the internet permission for a bare webview project" {
            let file = write_manifest(r#"{"fallbackType": "webview"}"#);
            let manifest = TwaManifest::load(file.path()).expect("Failed to load manifest");
            let manager = FeatureManager::new(&manifest);

            assert_eq!(
                render::render_section(&manager, Section::Manifest),
                "<uses-permission android:name=\"android.permission.INTERNET\"/>\n"
            );
            assert_eq!(render::render_section(&manager, Section::Build), "");
        }
    }
}
