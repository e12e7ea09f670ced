pub mod demo;
pub mod devices;
pub mod notification;
pub mod order;
pub mod shapes;
