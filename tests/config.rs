use shared_components::config::Config;
use shared_components::symbols::SymbolTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.theme.preset, "default");
    assert_eq!(config.theme.symbols, SymbolTheme::Unicode);
    assert_eq!(config.scroll_shadow.page_size, 10);
    assert!(!config.scroll_shadow.debug_show_sentinels);
    assert!(!config.scroll_shadow.outer);
    assert_eq!(config.gallery.tick_rate_ms, 250);
    assert!(config.gallery.mouse_enabled);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown theme preset should fail
    config.theme.preset = "neon".to_string();
    assert!(config.validate().is_err());

    // Reset and test unknown log level
    config.theme.preset = "dark".to_string();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    // Reset and test zero page size
    config.logging.level = "debug".to_string();
    config.scroll_shadow.page_size = 0;
    assert!(config.validate().is_err());

    // Reset and test tick rate bounds
    config.scroll_shadow.page_size = 5;
    config.gallery.tick_rate_ms = 5;
    assert!(config.validate().is_err());
    config.gallery.tick_rate_ms = 2000;
    assert!(config.validate().is_err());
    config.gallery.tick_rate_ms = 1000;
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("preset = \"default\""));
    assert!(toml_str.contains("symbols = \"unicode\""));
    assert!(toml_str.contains("page_size = 10"));
    assert!(toml_str.contains("tick_rate_ms = 250"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[theme]
preset = "mono"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.theme.preset, "mono");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.theme.symbols, SymbolTheme::Unicode); // default value
    assert_eq!(config.logging.level, "info"); // default value
    assert!(config.logging.file.is_none()); // default value
    assert_eq!(config.scroll_shadow.page_size, 10); // default value
    assert!(config.gallery.mouse_enabled); // default value
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.theme.preset, default_config.theme.preset);
    assert_eq!(config.scroll_shadow.page_size, default_config.scroll_shadow.page_size);
    assert_eq!(config.gallery.tick_rate_ms, default_config.gallery.tick_rate_ms);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("component_gallery_test_invalid");
    fs::create_dir_all(&temp_dir).unwrap();
    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "[scroll_shadow]\npage_size = 0\n").unwrap();

    assert!(Config::load_from_file(&config_path).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("component_gallery_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Component Gallery Configuration File"));
    assert!(content.contains("preset = \"default\""));
    assert!(Config::load_from_file(&config_path).is_ok());

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
