// Domain layer: plain data types and the capability traits the core is written against.
// No I/O here; output goes through the `Console` port.

pub mod model;
pub mod ports;
