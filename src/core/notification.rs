use crate::adapters::StdoutConsole;
use crate::domain::ports::{Console, MessageSender};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct EmailSender<C: Console = StdoutConsole> {
    console: C,
}

impl EmailSender {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Console> EmailSender<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> MessageSender for EmailSender<C> {
    fn send_message(&self, message: &str) {
        self.console.write_line(&format!("Sending email: {}", message));
    }
}

#[derive(Debug, Clone, Default)]
pub struct SmsSender<C: Console = StdoutConsole> {
    console: C,
}

impl SmsSender {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Console> SmsSender<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> MessageSender for SmsSender<C> {
    fn send_message(&self, message: &str) {
        self.console.write_line(&format!("Send Message: {}", message));
    }
}

/// Depends only on the `MessageSender` abstraction, never on a concrete sender.
#[derive(Clone)]
pub struct NotificationService {
    sender: Arc<dyn MessageSender>,
}

impl NotificationService {
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self { sender }
    }

    /// Forwards the message unchanged. Delivery is assumed to succeed.
    pub fn send_notification(&self, message: &str) {
        tracing::debug!("Dispatching notification ({} bytes)", message.len());
        self.sender.send_message(message);
    }
}
