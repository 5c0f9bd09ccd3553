use std::{
    any::Any,
    fmt::Debug,
    io::{self, Write},
};

use anyhow::Result;

use crate::models::{kind::ChannelKind, message::Message, priority::Priority};

pub trait Notifiable: Any + Debug {
    fn message(&self) -> &Message;

    fn priority(&self) -> Priority;

    fn destination(&self) -> &str;

    fn kind(&self) -> ChannelKind;

    fn validate(&self) -> Result<()>;

    fn as_any(&self) -> &dyn Any;

    fn address_label(&self) -> String {
        self.destination().to_string()
    }

    fn render(&self) -> String {
        format!(
            "Sending {} to {}: {} [{}] {}",
            self.kind(),
            self.address_label(),
            self.priority().prefix(),
            self.message().category(),
            self.message().content()
        )
    }

    fn send_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.render())
    }

    fn send(&self) {
        let _ = self.send_to(&mut io::stdout().lock());
    }
}
