use cybersys::core::config::{DashboardConfig, Settings, SettingsField, Theme};
use cybersys::core::derived::Thresholds;

#[test]
fn test_default_config_is_valid() {
    let config = DashboardConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.kill_delay_ms, 500);
    assert_eq!(config.clean_delay_ms, 2000);
    assert_eq!(config.history_capacity, 60);
}

#[test]
fn test_inverted_thresholds_rejected() {
    let mut config = DashboardConfig::default();
    config.health.disk = Thresholds::new(95.0, 80.0);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Disk"));
}

#[test]
fn test_config_serializes() {
    let config = DashboardConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: DashboardConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.settings, config.settings);
    assert_eq!(back.metrics_interval_ms, config.metrics_interval_ms);
}

#[test]
fn test_settings_defaults_and_toggle() {
    let mut settings = Settings::default();
    assert!(!settings.start_with_system);
    assert!(settings.auto_refresh);
    assert_eq!(settings.theme, Theme::Cyberpunk);

    settings.toggle(SettingsField::Theme);
    assert_eq!(settings.theme, Theme::Midnight);
    settings.toggle(SettingsField::AutoRefresh);
    assert_eq!(settings.display_value(SettingsField::AutoRefresh), "off");
}

#[test]
fn test_theme_parsing() {
    assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
    assert!("solarized".parse::<Theme>().is_err());
}
