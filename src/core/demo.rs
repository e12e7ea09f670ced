use crate::config::scenario::Scenario;
use crate::core::devices::{SimplePrinter, SimpleScanner};
use crate::core::notification::{EmailSender, NotificationService, SmsSender};
use crate::core::shapes::{print_area, total_area};
use crate::domain::model::DemoSummary;
use crate::domain::ports::{Console, Printer, Scanner, Shape};
use std::sync::Arc;

/// Runs each principle's example in turn against one console.
pub struct SolidDemo<C: Console + Clone + 'static> {
    console: C,
    scenario: Scenario,
}

impl<C: Console + Clone + 'static> SolidDemo<C> {
    pub fn new(console: C, scenario: Scenario) -> Self {
        Self { console, scenario }
    }

    pub fn run(&self) -> DemoSummary {
        tracing::info!("Starting SOLID demo");

        let order_total = self.single_responsibility();
        let total_area = self.open_closed();
        self.liskov_substitution();
        self.interface_segregation();
        self.dependency_inversion();

        tracing::info!("SOLID demo finished");
        DemoSummary {
            order_total,
            total_area,
        }
    }

    fn single_responsibility(&self) -> f64 {
        tracing::info!("Single responsibility: order total");
        let order = &self.scenario.order;
        let total = order.total_price();
        tracing::debug!(
            "Order for {} has {} items, total {}",
            order.customer,
            order.items.len(),
            total
        );

        self.console.write_line(&total.to_string());
        order.notify_customer(&self.console);
        total
    }

    fn open_closed(&self) -> f64 {
        tracing::info!("Open/closed: shape area aggregation");
        let shapes: Vec<Box<dyn Shape>> = self
            .scenario
            .shapes
            .iter()
            .map(|spec| spec.into_shape())
            .collect();
        let area = total_area(&shapes);
        tracing::debug!("Aggregated {} shapes", shapes.len());

        self.console.write_line(&format!("Total Area:{:.2}", area));
        area
    }

    fn liskov_substitution(&self) {
        tracing::info!("Liskov substitution: printing areas");
        for spec in &self.scenario.substitution_shapes {
            let shape = spec.into_shape();
            print_area(&self.console, shape.as_ref());
        }
    }

    fn interface_segregation(&self) {
        tracing::info!("Interface segregation: printer and scanner");
        let printer = SimplePrinter::with_console(self.console.clone());
        let scanner = SimpleScanner::with_console(self.console.clone());

        printer.print();
        scanner.scan();
    }

    fn dependency_inversion(&self) {
        tracing::info!("Dependency inversion: notification senders");
        let email = Arc::new(EmailSender::with_console(self.console.clone()));
        let sms = Arc::new(SmsSender::with_console(self.console.clone()));

        let email_notification = NotificationService::new(email);
        let sms_notification = NotificationService::new(sms);

        let message = &self.scenario.notification.message;
        email_notification.send_notification(message);
        sms_notification.send_notification(message);
    }
}
