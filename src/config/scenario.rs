use crate::domain::model::{LineItem, Order, ShapeSpec, DEFAULT_CUSTOMER};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_finite, validate_non_empty_string, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_NOTIFICATION_MESSAGE: &str = "DIP: Hello, this is an email notification!";

/// Inputs for one demo run. Every table is optional in the TOML form and falls back to
/// the built-in values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub order: Order,
    /// Aggregated into a single total.
    pub shapes: Vec<ShapeSpec>,
    /// Printed one by one through the shared area entry point.
    pub substitution_shapes: Vec<ShapeSpec>,
    pub notification: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationConfig {
    pub message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_NOTIFICATION_MESSAGE.to_string(),
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::new(DEFAULT_CUSTOMER, vec![LineItem::new("Rahul", 1050.0, 2)])
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            order: Order::default(),
            shapes: vec![
                ShapeSpec::Rectangle {
                    width: 2.0,
                    height: 4.0,
                },
                ShapeSpec::Circle { radius: 3.0 },
            ],
            substitution_shapes: vec![
                ShapeSpec::Rectangle {
                    width: 3.0,
                    height: 4.0,
                },
                ShapeSpec::Circle { radius: 5.0 },
            ],
            notification: NotificationConfig::default(),
        }
    }
}

impl Scenario {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut scenario: Scenario =
            toml::from_str(content).map_err(|e| DemoError::ConfigParseError {
                message: e.to_string(),
            })?;

        scenario.substitute_env_vars()?;
        Ok(scenario)
    }

    /// Expands `${VAR}` in the parsed text fields. Values are inserted after parsing, so
    /// they never change the TOML structure.
    fn substitute_env_vars(&mut self) -> Result<()> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigParseError {
            message: format!("env substitution pattern: {}", e),
        })?;

        expand_env_vars(&re, &mut self.order.customer);
        for item in &mut self.order.items {
            expand_env_vars(&re, &mut item.name);
        }
        expand_env_vars(&re, &mut self.notification.message);

        Ok(())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("order.customer", &self.order.customer)?;

        for (i, item) in self.order.items.iter().enumerate() {
            validate_finite(&format!("order.items[{}].unit_price", i), item.unit_price)?;
        }

        validate_shapes("shapes", &self.shapes)?;
        validate_shapes("substitution_shapes", &self.substitution_shapes)?;

        // Forwarded verbatim, so whitespace-only text is a valid message.
        if self.notification.message.is_empty() {
            return Err(DemoError::InvalidConfigValueError {
                field: "notification.message".to_string(),
                value: String::new(),
                reason: "Message cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Unknown variables are left as written.
fn expand_env_vars(re: &Regex, value: &mut String) {
    let expanded = re
        .replace_all(value, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned();
    *value = expanded;
}

fn validate_shapes(field_name: &str, shapes: &[ShapeSpec]) -> Result<()> {
    for (i, shape) in shapes.iter().enumerate() {
        match *shape {
            ShapeSpec::Rectangle { width, height } => {
                validate_finite(&format!("{}[{}].width", field_name, i), width)?;
                validate_finite(&format!("{}[{}].height", field_name, i), height)?;
            }
            ShapeSpec::Circle { radius } => {
                validate_finite(&format!("{}[{}].radius", field_name, i), radius)?;
            }
        }
    }
    Ok(())
}

impl Validate for Scenario {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_gives_default_scenario() {
        let scenario = Scenario::from_toml_str("").unwrap();
        assert_eq!(scenario, Scenario::default());
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_parse_full_scenario() {
        let toml_content = r#"
[order]
customer = "someone@example.com"

[[order.items]]
name = "Keyboard"
unit_price = 49.5
quantity = 2

[[order.items]]
name = "Mouse"
unit_price = 20.0
quantity = 1

[[shapes]]
kind = "rectangle"
width = 1.0
height = 2.0

[[substitution_shapes]]
kind = "circle"
radius = 1.0

[notification]
message = "Your parcel is on its way"
"#;

        let scenario = Scenario::from_toml_str(toml_content).unwrap();

        assert_eq!(scenario.order.customer, "someone@example.com");
        assert_eq!(scenario.order.items.len(), 2);
        assert_eq!(scenario.order.total_price(), 119.0);
        assert_eq!(
            scenario.shapes,
            vec![ShapeSpec::Rectangle {
                width: 1.0,
                height: 2.0
            }]
        );
        assert_eq!(
            scenario.substitution_shapes,
            vec![ShapeSpec::Circle { radius: 1.0 }]
        );
        assert_eq!(scenario.notification.message, "Your parcel is on its way");
    }

    #[test]
    fn test_partial_scenario_keeps_other_defaults() {
        let toml_content = r#"
[notification]
message = "only this changes"
"#;
        let scenario = Scenario::from_toml_str(toml_content).unwrap();

        assert_eq!(scenario.notification.message, "only this changes");
        assert_eq!(scenario.order, Order::default());
        assert_eq!(scenario.shapes, Scenario::default().shapes);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SOLID_DEMO_TEST_CUSTOMER", "env-customer");

        let toml_content = r#"
[order]
customer = "${SOLID_DEMO_TEST_CUSTOMER}"

[notification]
message = "Hi ${SOLID_DEMO_TEST_UNSET_VAR}"
"#;

        let scenario = Scenario::from_toml_str(toml_content).unwrap();
        assert_eq!(scenario.order.customer, "env-customer");
        assert!(scenario.order.items.is_empty());
        assert_eq!(
            scenario.notification.message,
            "Hi ${SOLID_DEMO_TEST_UNSET_VAR}"
        );

        std::env::remove_var("SOLID_DEMO_TEST_CUSTOMER");
    }

    #[test]
    fn test_unknown_shape_kind_is_parse_error() {
        let toml_content = r#"
[[shapes]]
kind = "triangle"
base = 1.0
"#;
        let err = Scenario::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, DemoError::ConfigParseError { .. }));
    }

    #[test]
    fn test_validation_rejects_blank_customer_and_non_finite_values() {
        let mut scenario = Scenario::default();
        scenario.order.customer = "  ".to_string();
        assert!(scenario.validate().is_err());

        let mut scenario = Scenario::default();
        scenario.substitution_shapes = vec![ShapeSpec::Circle {
            radius: f64::INFINITY,
        }];
        let err = scenario.validate().unwrap_err();
        match err {
            DemoError::InvalidConfigValueError { field, .. } => {
                assert_eq!(field, "substitution_shapes[0].radius")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validation_accepts_negative_values() {
        let toml_content = r#"
[[order.items]]
name = "refund"
unit_price = 10.0
quantity = -1

[[shapes]]
kind = "rectangle"
width = -2.0
height = 4.0
"#;
        let scenario = Scenario::from_toml_str(toml_content).unwrap();
        assert!(scenario.validate().is_ok());
        assert_eq!(scenario.order.total_price(), -10.0);
    }

    #[test]
    fn test_items_without_customer_use_default_customer() {
        let toml_content = r#"
[[order.items]]
name = "x"
unit_price = 1.0
quantity = 1
"#;
        let scenario = Scenario::from_toml_str(toml_content).unwrap();

        assert_eq!(scenario.order.customer, DEFAULT_CUSTOMER);
        assert_eq!(scenario.order.items, vec![LineItem::new("x", 1.0, 1)]);
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_env_values_with_quotes_stay_literal() {
        std::env::set_var("SOLID_DEMO_TEST_QUOTED", "say \"hi\"");
        std::env::set_var(
            "SOLID_DEMO_TEST_MULTILINE",
            "x\"\n[order]\ncustomer = \"injected",
        );

        let toml_content = r#"
[order]
customer = "${SOLID_DEMO_TEST_MULTILINE}"

[[order.items]]
name = "${SOLID_DEMO_TEST_QUOTED}"
unit_price = 2.0
quantity = 1

[notification]
message = "${SOLID_DEMO_TEST_QUOTED}"
"#;

        let scenario = Scenario::from_toml_str(toml_content).unwrap();
        assert_eq!(
            scenario.order.customer,
            "x\"\n[order]\ncustomer = \"injected"
        );
        assert_eq!(scenario.order.items[0].name, "say \"hi\"");
        assert_eq!(scenario.notification.message, "say \"hi\"");

        std::env::remove_var("SOLID_DEMO_TEST_QUOTED");
        std::env::remove_var("SOLID_DEMO_TEST_MULTILINE");
    }

    #[test]
    fn test_whitespace_message_is_valid_but_empty_is_not() {
        let mut scenario = Scenario::default();
        scenario.notification.message = "   ".to_string();
        assert!(scenario.validate().is_ok());

        scenario.notification.message.clear();
        let err = scenario.validate().unwrap_err();
        match err {
            DemoError::InvalidConfigValueError { field, .. } => {
                assert_eq!(field, "notification.message")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_scenario_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[order]\ncustomer = \"file-customer\"\n")
            .unwrap();

        let scenario = Scenario::from_file(temp_file.path()).unwrap();
        assert_eq!(scenario.order.customer, "file-customer");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Scenario::from_file("/definitely/not/here/scenario.toml").unwrap_err();
        assert!(matches!(err, DemoError::IoError(_)));
    }
}
