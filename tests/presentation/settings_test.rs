use config::{Config, File, FileFormat};

use sentiscope::presentation::Settings;

fn from_toml(source: &str) -> Settings {
    Config::builder()
        .add_source(File::from_str(source, FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[test]
fn given_empty_configuration_when_loading_then_every_default_applies() {
    let settings = from_toml("");

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 3000);
    assert!(!settings.classifier.enabled);
    assert!(settings.classifier.endpoint.is_none());
    assert_eq!(settings.classifier.timeout_ms, 5_000);
    assert_eq!(settings.classifier.max_input_chars, 500);
    assert_eq!(settings.analysis.max_concurrency, 8);
    assert!(!settings.logging.json_format);
}

#[test]
fn given_partial_sections_when_loading_then_overrides_only_named_fields() {
    let settings = from_toml(
        r#"
        [classifier]
        enabled = true
        endpoint = "https://inference.example/models/sentiment"
        timeout_ms = 1500

        [analysis]
        max_concurrency = 2
        "#,
    );

    assert!(settings.classifier.enabled);
    assert_eq!(
        settings.classifier.endpoint.as_deref(),
        Some("https://inference.example/models/sentiment")
    );
    assert_eq!(settings.classifier.timeout_ms, 1500);
    assert_eq!(settings.classifier.max_input_chars, 500);
    assert_eq!(settings.analysis.max_concurrency, 2);
    assert_eq!(settings.server.port, 3000);
}
