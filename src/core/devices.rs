use crate::adapters::StdoutConsole;
use crate::domain::ports::{Console, Printer, Scanner};

pub const PRINTING_MESSAGE: &str = "ISP: Printing...............";
pub const SCANNING_MESSAGE: &str = "ISP: Scanning...............";

/// Prints only. Has no scanning method to stub out.
#[derive(Debug, Clone, Default)]
pub struct SimplePrinter<C: Console = StdoutConsole> {
    console: C,
}

impl SimplePrinter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Console> SimplePrinter<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Printer for SimplePrinter<C> {
    fn print(&self) {
        self.console.write_line(PRINTING_MESSAGE);
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimpleScanner<C: Console = StdoutConsole> {
    console: C,
}

impl SimpleScanner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Console> SimpleScanner<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Scanner for SimpleScanner<C> {
    fn scan(&self) {
        self.console.write_line(SCANNING_MESSAGE);
    }
}

/// Built from one printer and one scanner; gets `Multifunction` through the blanket impl.
#[derive(Debug, Clone)]
pub struct MultifunctionDevice<P: Printer, S: Scanner> {
    printer: P,
    scanner: S,
}

impl<P: Printer, S: Scanner> MultifunctionDevice<P, S> {
    pub fn new(printer: P, scanner: S) -> Self {
        Self { printer, scanner }
    }
}

impl<P: Printer, S: Scanner> Printer for MultifunctionDevice<P, S> {
    fn print(&self) {
        self.printer.print();
    }
}

impl<P: Printer, S: Scanner> Scanner for MultifunctionDevice<P, S> {
    fn scan(&self) {
        self.scanner.scan();
    }
}
