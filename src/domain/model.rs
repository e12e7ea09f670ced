use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: i64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

pub const DEFAULT_CUSTOMER: &str = "rahulreza920";

fn default_customer() -> String {
    DEFAULT_CUSTOMER.to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    #[serde(default = "default_customer")]
    pub customer: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Order {
    pub fn new(customer: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            customer: customer.into(),
            items,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

/// Shape description as written in a scenario file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoSummary {
    pub order_total: f64,
    pub total_area: f64,
}
