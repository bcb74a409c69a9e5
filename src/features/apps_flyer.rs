//! AppsFlyer attribution SDK integration.

use crate::models::{AppsFlyerConfig, Feature};

pub const APPS_FLYER_FEATURE_NAME: &str = "appsflyer";

pub const APPS_FLYER_SDK: &str = "com.appsflyer:af-android-sdk:5.4.0";
pub const INSTALL_REFERRER: &str = "com.android.installreferrer:installreferrer:1.0";

const INSTALL_REFERRER_RECEIVER: &str = r#"<receiver
    android:name="com.appsflyer.SingleInstallBroadcastReceiver"
    android:exported="true">
    <intent-filter>
        <action android:name="com.android.vending.INSTALL_REFERRER" />
    </intent-filter>
</receiver>"#;

const ON_CREATE: &str = r#"AppsFlyerConversionListener conversionListener = new AppsFlyerConversionListener() {
    @Override
    public void onConversionDataSuccess(Map<String, Object> conversionData) {}

    @Override
    public void onConversionDataFail(String errorMessage) {}

    @Override
    public void onAppOpenAttribution(Map<String, String> attributionData) {}

    @Override
    public void onAttributionFailure(String errorMessage) {}
};
AppsFlyerLib.getInstance().init(AF_DEV_KEY, conversionListener, this);
AppsFlyerLib.getInstance().startTracking(this);"#;

const LAUNCH_URL: &str = r#"String appsFlyerId = AppsFlyerLib.getInstance().getAppsFlyerUID(this);
uri = uri
    .buildUpon()
    .appendQueryParameter("appsflyer_id", appsFlyerId)
    .build();"#;

/// Build the AppsFlyer feature for the given dev key.
///
/// The SDK is initialised from the application class, and the launcher tags the
/// start URL with the device's AppsFlyer id so the site can attribute the visit.
pub fn apps_flyer_feature(config: &AppsFlyerConfig) -> Feature {
    let mut feature = Feature::new(APPS_FLYER_FEATURE_NAME);

    feature.build.repositories.push("mavenCentral()".to_string());
    feature.build.dependencies.extend([
        APPS_FLYER_SDK.to_string(),
        INSTALL_REFERRER.to_string(),
    ]);

    feature.android_manifest.permissions.extend([
        "android.permission.INTERNET".to_string(),
        "android.permission.ACCESS_NETWORK_STATE".to_string(),
        "android.permission.ACCESS_WIFI_STATE".to_string(),
    ]);
    feature
        .android_manifest
        .components
        .push(INSTALL_REFERRER_RECEIVER.to_string());

    feature.application.imports.extend([
        "java.util.Map".to_string(),
        "com.appsflyer.AppsFlyerLib".to_string(),
        "com.appsflyer.AppsFlyerConversionListener".to_string(),
    ]);
    feature.application.variables.push(format!(
        "private static final String AF_DEV_KEY = \"{}\";",
        config.apps_flyer_id
    ));
    feature.application.on_create = Some(ON_CREATE.to_string());

    feature
        .launcher_activity
        .imports
        .push("com.appsflyer.AppsFlyerLib".to_string());
    feature.launcher_activity.launch_url = Some(LAUNCH_URL.to_string());

    feature
}
