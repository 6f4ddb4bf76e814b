//! Method channel behavior of the Dynalinks plugin.

use std::sync::Arc;

use dynalinks_bridge::channel::methods;
use dynalinks_bridge::{ChannelError, DynalinksPlugin, MethodCall, MethodCallHandler, Platform};
use dynalinks_core::{LinkData, LogLevel, MockDeepLinkSdk, ResolvedLink, SdkError};
use serde_json::{json, Value};

fn attached_plugin(sdk: &Arc<MockDeepLinkSdk>, platform: Platform) -> DynalinksPlugin {
    let plugin = DynalinksPlugin::new(sdk.clone(), platform);
    plugin.on_attached_to_engine();
    plugin
}

fn error_code(result: Result<Value, ChannelError>) -> String {
    match result {
        Err(ChannelError::Failed(error)) => error.code,
        other => panic!("expected a failed call, got {:?}", other),
    }
}

#[tokio::test]
async fn test_configure_passes_settings_to_sdk() {
    let sdk = Arc::new(MockDeepLinkSdk::new());
    let plugin = attached_plugin(&sdk, Platform::Android);

    let result = plugin
        .handle_method_call(MethodCall::new(
            methods::CONFIGURE,
            json!({
                "clientAPIKey": "pk_live_123",
                "logLevel": "info",
                "allowSimulatorOrEmulator": true
            }),
        ))
        .await;

    assert_eq!(result, Ok(Value::Null));
    let config = sdk.config().unwrap();
    assert_eq!(config.client_api_key, "pk_live_123");
    assert_eq!(config.base_url, "https://dynalinks.app/api/v1");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.allow_emulator);
}

#[tokio::test]
async fn test_configure_without_api_key_is_invalid_arguments() {
    let sdk = Arc::new(MockDeepLinkSdk::new());
    let plugin = attached_plugin(&sdk, Platform::Ios);

    let result = plugin
        .handle_method_call(MethodCall::new(methods::CONFIGURE, json!({ "logLevel": "debug" })))
        .await;

    match result {
        Err(ChannelError::Failed(error)) => {
            assert_eq!(error.code, "INVALID_ARGUMENTS");
            assert_eq!(error.message, "Missing clientAPIKey");
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert!(!sdk.is_configured());
}

#[tokio::test]
async fn test_configure_before_engine_attach_has_no_context() {
    let sdk = Arc::new(MockDeepLinkSdk::new());
    let plugin = DynalinksPlugin::new(sdk.clone(), Platform::Android);

    let result = plugin
        .handle_method_call(MethodCall::new(
            methods::CONFIGURE,
            json!({ "clientAPIKey": "pk_live_123" }),
        ))
        .await;

    assert_eq!(error_code(result), "NO_CONTEXT");
    assert!(!sdk.is_configured());
}

#[tokio::test]
async fn test_configure_failures_are_mapped() {
    let sdk = Arc::new(MockDeepLinkSdk::new());
    let plugin = attached_plugin(&sdk, Platform::Android);

    let blank_key = plugin
        .handle_method_call(MethodCall::new(methods::CONFIGURE, json!({ "clientAPIKey": "" })))
        .await;
    assert_eq!(error_code(blank_key), "INVALID_API_KEY");

    sdk.fail_configure(SdkError::unknown("keystore unavailable"));
    let other = plugin
        .handle_method_call(MethodCall::new(
            methods::CONFIGURE,
            json!({ "clientAPIKey": "pk_live_123" }),
        ))
        .await;
    assert_eq!(error_code(other), "UNKNOWN");
}

#[tokio::test]
async fn test_deferred_check_while_unconfigured() {
    let sdk = Arc::new(MockDeepLinkSdk::new());
    let plugin = attached_plugin(&sdk, Platform::Android);

    let result = plugin
        .handle_method_call(MethodCall::bare(methods::CHECK_FOR_DEFERRED_DEEP_LINK))
        .await;

    match result {
        Err(ChannelError::Failed(error)) => {
            assert_eq!(error.code, "NOT_CONFIGURED");
            assert_eq!(error.message, "SDK not configured");
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[tokio::test]
async fn test_deferred_check_flags_result_as_deferred() {
    let sdk = Arc::new(MockDeepLinkSdk::configured());
    let mut data = LinkData::new("lnk_9", "/welcome");
    data.deep_link_value = Some("onboarding".to_string());
    sdk.respond_deferred(Ok(ResolvedLink::matched(data)));
    let plugin = attached_plugin(&sdk, Platform::Ios);

    let value = plugin
        .handle_method_call(MethodCall::bare(methods::CHECK_FOR_DEFERRED_DEEP_LINK))
        .await
        .unwrap();

    assert_eq!(value["matched"], json!(true));
    assert_eq!(value["is_deferred"], json!(true));
    assert_eq!(value["link"]["deep_link_value"], json!("onboarding"));
}

#[tokio::test]
async fn test_deferred_check_restricted_device_code_per_platform() {
    for (platform, code) in [(Platform::Android, "EMULATOR"), (Platform::Ios, "SIMULATOR")] {
        let sdk = Arc::new(MockDeepLinkSdk::configured());
        sdk.respond_deferred(Err(SdkError::RestrictedDevice));
        let plugin = attached_plugin(&sdk, platform);

        let result = plugin
            .handle_method_call(MethodCall::bare(methods::CHECK_FOR_DEFERRED_DEEP_LINK))
            .await;
        assert_eq!(error_code(result), code);
    }
}

#[tokio::test]
async fn test_handle_deep_link_resolves_uri() {
    let sdk = Arc::new(MockDeepLinkSdk::configured());
    let plugin = attached_plugin(&sdk, Platform::Android);

    let value = plugin
        .handle_method_call(MethodCall::new(
            methods::HANDLE_DEEP_LINK,
            json!({ "uri": "https://dynalinks.app/summer" }),
        ))
        .await
        .unwrap();

    assert_eq!(value["is_deferred"], json!(false));
    assert_eq!(value["confidence"], json!("high"));
    assert_eq!(value["link"]["shortened_path"], json!("summer"));
    assert_eq!(sdk.handled_uris(), vec!["https://dynalinks.app/summer"]);
}

#[tokio::test]
async fn test_handle_deep_link_rejects_missing_uri() {
    let sdk = Arc::new(MockDeepLinkSdk::configured());
    let plugin = attached_plugin(&sdk, Platform::Android);

    for arguments in [Value::Null, json!({ "uri": "not a link" })] {
        let result = plugin
            .handle_method_call(MethodCall::new(methods::HANDLE_DEEP_LINK, arguments))
            .await;
        assert_eq!(error_code(result), "INVALID_ARGUMENTS");
    }
    assert!(sdk.handled_uris().is_empty());
}

#[tokio::test]
async fn test_handle_deep_link_maps_server_error() {
    let sdk = Arc::new(MockDeepLinkSdk::configured());
    sdk.respond_to("https://dynalinks.app/x", Err(SdkError::server(503, None)));
    let plugin = attached_plugin(&sdk, Platform::Ios);

    let result = plugin
        .handle_method_call(MethodCall::new(
            methods::HANDLE_DEEP_LINK,
            json!({ "uri": "https://dynalinks.app/x" }),
        ))
        .await;

    match result {
        Err(ChannelError::Failed(error)) => {
            assert_eq!(error.code, "SERVER_ERROR");
            assert_eq!(error.message, "Server error: 503");
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[tokio::test]
async fn test_get_initial_link_without_launch_is_null() {
    let sdk = Arc::new(MockDeepLinkSdk::configured());
    let plugin = attached_plugin(&sdk, Platform::Android);

    let result = plugin
        .handle_method_call(MethodCall::bare(methods::GET_INITIAL_LINK))
        .await;
    assert_eq!(result, Ok(Value::Null));
}

#[tokio::test]
async fn test_reset_always_succeeds() {
    let sdk = Arc::new(MockDeepLinkSdk::new());
    let plugin = attached_plugin(&sdk, Platform::Android);

    for _ in 0..2 {
        let result = plugin
            .handle_method_call(MethodCall::bare(methods::RESET))
            .await;
        assert_eq!(result, Ok(Value::Null));
    }
    assert_eq!(sdk.reset_count(), 2);
}

#[tokio::test]
async fn test_unknown_method_is_not_implemented() {
    let sdk = Arc::new(MockDeepLinkSdk::configured());
    let plugin = attached_plugin(&sdk, Platform::Android);

    let result = plugin
        .on_method_call(MethodCall::bare("shareLink"))
        .await;
    assert_eq!(
        result,
        Err(ChannelError::NotImplemented("shareLink".to_string()))
    );
}
