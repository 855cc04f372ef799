//! Integration tests for settings-driven registry construction.

use super::helpers::{RegistryContext, local_connection, remote_connection};
use kernel_controllers::controller_registry::{
    adapters::settings::{RegistrySettings, SettingsError},
    domain::ViewType,
    ports::KernelPickerMode,
};
use rstest::rstest;

fn context_from(settings: &RegistrySettings) -> RegistryContext {
    RegistryContext::with_filter_inputs(
        settings.picker_mode_source(),
        settings.hidden_connection_set(),
        settings.server_selection(),
    )
}

#[rstest]
fn settings_seed_filter_inputs() {
    let settings = RegistrySettings::from_json(
        r#"{
            "kernelPickerType": "Stable",
            "hiddenConnections": ["k2"],
            "currentServerId": "server-a"
        }"#,
    )
    .expect("valid settings");
    let context = context_from(&settings);

    context.registry.batch_add(
        &[
            local_connection("k1", "Python 3"),
            local_connection("k2", "Hidden"),
            remote_connection("r1", "server-a"),
            remote_connection("r2", "server-b"),
        ],
        &[ViewType::JupyterNotebook],
    );

    assert_eq!(context.registered_ids(), vec!["k1", "r1"]);
    assert_eq!(context.registry.all().len(), 4);
}

#[rstest]
fn empty_settings_use_defaults() {
    let settings = RegistrySettings::from_json("{}").expect("valid settings");

    assert_eq!(settings, RegistrySettings::default());
    assert_eq!(settings.kernel_picker_type, KernelPickerMode::Stable);
}

#[rstest]
#[case(r#"{ "kernelPickerType": "Nightly" }"#)]
#[case(r#"{ "hiddenConnections": [""] }"#)]
#[case(r#"{ "hiddenConnections": ["k1_Interactive"] }"#)]
#[case("not json")]
fn invalid_settings_are_rejected(#[case] raw: &str) {
    assert!(matches!(
        RegistrySettings::from_json(raw),
        Err(SettingsError::Parse(_))
    ));
}
