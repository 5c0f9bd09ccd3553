use std::io::Write;

use anyhow::{Error, Result};
use tracing::info;

use crate::{
    channels::{email::Email, notifiable::Notifiable, push::PushNotification, sms::Sms},
    config::Config,
    dispatcher::Dispatcher,
    models::{
        delivery::DeliveryRecord,
        kind::ChannelKind,
        message::{Message, MessageCategory},
        priority::Priority,
    },
    utils::filter_channels,
};

pub fn sample_messages() -> [Message; 3] {
    [
        Message::new(MessageCategory::Promotion, "20% OFF coupon just for you!"),
        Message::new(
            MessageCategory::Reminder,
            "Don't forget your appointment tomorrow.",
        ),
        Message::new(MessageCategory::Alert, "Suspicious login attempt!"),
    ]
}

pub fn sample_channels() -> Vec<Box<dyn Notifiable>> {
    let [promotion, reminder, alert] = sample_messages();

    vec![
        Box::new(Email::new(promotion, Priority::High, "customer@example.com")),
        Box::new(Sms::new(reminder, Priority::Medium, "+5541900000000")),
        Box::new(PushNotification::new(alert, Priority::Low, "abc123xyz")),
    ]
}

pub fn run<W: Write>(config: &Config, out: W) -> Result<Vec<DeliveryRecord>, Error> {
    let channels = sample_channels();
    let mut dispatcher = Dispatcher::new(out, config.validate_destinations);

    info!(count = channels.len(), "Dispatching all channels");
    let mut records = dispatcher.dispatch_all(channels.iter().map(|channel| &**channel))?;

    for kind in &config.filter_kinds {
        dispatcher.section(*kind)?;

        let filtered = match kind {
            ChannelKind::Email => dispatcher.dispatch_all(filter_channels::<Email>(&channels))?,
            ChannelKind::Sms => dispatcher.dispatch_all(filter_channels::<Sms>(&channels))?,
            ChannelKind::Push => {
                dispatcher.dispatch_all(filter_channels::<PushNotification>(&channels))?
            }
        };

        info!(channel = %kind, count = filtered.len(), "Dispatched filtered channels");
        records.extend(filtered);
    }

    Ok(records)
}
