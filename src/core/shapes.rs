use crate::domain::model::{Circle, Rectangle, ShapeSpec};
use crate::domain::ports::{Console, Shape};
use std::f64::consts::PI;

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl ShapeSpec {
    pub fn into_shape(self) -> Box<dyn Shape> {
        match self {
            ShapeSpec::Rectangle { width, height } => Box::new(Rectangle::new(width, height)),
            ShapeSpec::Circle { radius } => Box::new(Circle::new(radius)),
        }
    }
}

pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes
        .iter()
        .map(|shape| shape.area())
        .fold(0.0, |acc, area| acc + area)
}

pub fn format_area(shape: &dyn Shape) -> String {
    format!("LSP: Total Area:{:.2}", shape.area())
}

/// Works for any `Shape`; callers never need to know the concrete type.
pub fn print_area<C: Console + ?Sized>(console: &C, shape: &dyn Shape) {
    console.write_line(&format_area(shape));
}
