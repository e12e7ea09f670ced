use crate::domain::model::Order;
use crate::domain::ports::Console;

pub const ORDER_RECEIVED_MESSAGE: &str = "Your Order received successfully";

impl Order {
    /// Sum of `unit_price * quantity` over all items. No rounding, no validation.
    /// Starts from `+0.0`, so an empty order prints as `0`.
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.subtotal())
            .fold(0.0, |acc, subtotal| acc + subtotal)
    }

    pub fn notify_customer<C: Console + ?Sized>(&self, console: &C) {
        tracing::debug!("Notifying customer {}", self.customer);
        console.write_line(ORDER_RECEIVED_MESSAGE);
    }
}
