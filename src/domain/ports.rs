use std::sync::Arc;

/// Line-oriented text sink. Every demo component writes through this port.
pub trait Console: Send + Sync {
    fn write_line(&self, line: &str);
}

impl<C: Console + ?Sized> Console for &C {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

impl<C: Console + ?Sized> Console for Arc<C> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

/// Anything with an area. New shapes only need an impl of this trait.
pub trait Shape: Send + Sync {
    fn area(&self) -> f64;
}

pub trait Printer {
    fn print(&self);
}

pub trait Scanner {
    fn scan(&self);
}

/// A device that can do both. Implemented automatically for any printer that can also scan.
pub trait Multifunction: Printer + Scanner {}

impl<T: Printer + Scanner> Multifunction for T {}

pub trait MessageSender: Send + Sync {
    fn send_message(&self, message: &str);
}
