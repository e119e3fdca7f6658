// textveil-core/tests/config_integration_tests.rs
use anyhow::Result;
use tempfile::NamedTempFile;
use std::io::Write;

// Import the specific types and functions needed from the main crate's config module
use textveil_core::config::{self, DetectionConfig, PatternRule};
use textveil_core::entity::EntityType;

#[test]
fn test_load_default_patterns() {
    let config = DetectionConfig::load_default_patterns().unwrap();
    let names: Vec<&str> = config.patterns.iter().map(|p| p.name.as_str()).collect();
    // The declared order is the aggregation priority and must not change.
    assert_eq!(names, vec!["email", "phone", "ipv4", "credit_card", "url", "date"]);

    let email = config.patterns.iter().find(|p| p.name == "email").unwrap();
    assert_eq!(email.entity_type, EntityType::EmailAddress);
    assert!(!email.case_insensitive);

    let date = config.patterns.iter().find(|p| p.name == "date").unwrap();
    assert!(date.case_insensitive);
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
patterns:
  - name: ticket_id
    pattern: "TCK-[0-9]{6}"
    entity_type: CREDIT_CARD
    description: "A test pattern"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = DetectionConfig::load_from_file(file.path())?;
    assert_eq!(config.patterns.len(), 1);
    assert_eq!(config.patterns[0].name, "ticket_id");
    assert_eq!(config.patterns[0].pattern, Some("TCK-[0-9]{6}".to_string()));
    assert!(!config.patterns[0].case_insensitive); // omitted, so default false
    Ok(())
}

#[test]
fn test_load_from_file_rejects_invalid_regex() -> Result<()> {
    let yaml_content = r#"
patterns:
  - name: broken
    pattern: "([unclosed"
    entity_type: URL
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    assert!(DetectionConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_from_file_rejects_duplicate_names() -> Result<()> {
    let yaml_content = r#"
patterns:
  - name: twin
    pattern: "a"
    entity_type: URL
  - name: twin
    pattern: "b"
    entity_type: URL
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    assert!(DetectionConfig::load_from_file(file.path()).is_err());
    Ok(())
}

fn sample_rule(name: &str, pattern: &str) -> PatternRule {
    PatternRule {
        name: name.to_string(),
        description: None,
        entity_type: EntityType::Url,
        pattern: Some(pattern.to_string()),
        case_insensitive: false,
        enabled: None,
    }
}

#[test]
fn test_merge_patterns_no_user_config() {
    let default_config = DetectionConfig {
        patterns: vec![sample_rule("email", "old")],
    };
    let merged = config::merge_patterns(default_config.clone(), None);
    assert_eq!(merged, default_config);
}

#[test]
fn test_merge_patterns_override_keeps_position() {
    let default_config = DetectionConfig {
        patterns: vec![sample_rule("email", "default"), sample_rule("phone", "default")],
    };
    let user_config = DetectionConfig {
        patterns: vec![sample_rule("phone", "user"), sample_rule("custom", "user")],
    };
    let merged = config::merge_patterns(default_config, Some(user_config));

    let names: Vec<&str> = merged.patterns.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["email", "phone", "custom"]);
    assert_eq!(merged.patterns[1].pattern, Some("user".to_string()));
}

#[test]
fn test_set_active_patterns_disable() {
    let mut config = DetectionConfig {
        patterns: vec![sample_rule("email", "a"), sample_rule("phone", "b")],
    };
    config.set_active_patterns(&[], &["phone".to_string()]);
    assert_eq!(config.patterns.len(), 1);
    assert_eq!(config.patterns[0].name, "email");
}

#[test]
fn test_set_active_patterns_enable_is_exclusive() {
    let mut config = DetectionConfig {
        patterns: vec![sample_rule("email", "a"), sample_rule("phone", "b"), sample_rule("url", "c")],
    };
    config.set_active_patterns(&["phone".to_string()], &[]);
    assert_eq!(config.patterns.len(), 1);
    assert_eq!(config.patterns[0].name, "phone");
}
