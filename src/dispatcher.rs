use std::io::Write;

use anyhow::{Error, Result, anyhow};
use tracing::{debug, info, warn};

use crate::{
    channels::notifiable::Notifiable,
    models::{delivery::DeliveryRecord, kind::ChannelKind, status::DeliveryStatus},
};

pub struct Dispatcher<W: Write> {
    out: W,
    validate_destinations: bool,
}

impl<W: Write> Dispatcher<W> {
    pub fn new(out: W, validate_destinations: bool) -> Self {
        debug!(validate_destinations, "Dispatcher initialized");

        Self {
            out,
            validate_destinations,
        }
    }

    pub fn dispatch<N>(&mut self, channel: &N) -> Result<DeliveryRecord, Error>
    where
        N: Notifiable + ?Sized,
    {
        if self.validate_destinations
            && let Err(e) = channel.validate()
        {
            warn!(
                channel = %channel.kind(),
                destination = channel.destination(),
                error = %e,
                "Invalid destination, skipping delivery"
            );

            return Ok(record_for(channel, DeliveryStatus::Skipped).with_error(e.to_string()));
        }

        channel
            .send_to(&mut self.out)
            .map_err(|e| anyhow!("Failed to write delivery line: {}", e))?;

        let record = record_for(channel, DeliveryStatus::Sent);

        info!(
            id = %record.id,
            channel = %record.channel,
            destination = %record.destination,
            category = %record.category,
            priority = %record.priority,
            status = %record.status,
            "Notification sent"
        );
        debug!(record = %serde_json::to_value(&record)?, "Delivery record");

        Ok(record)
    }

    pub fn dispatch_all<'a, I, N>(&mut self, channels: I) -> Result<Vec<DeliveryRecord>, Error>
    where
        I: IntoIterator<Item = &'a N>,
        N: Notifiable + ?Sized + 'a,
    {
        channels
            .into_iter()
            .map(|channel| self.dispatch(channel))
            .collect()
    }

    pub fn section(&mut self, kind: ChannelKind) -> Result<(), Error> {
        writeln!(
            self.out,
            "\n--- Filtering {} channels only ---\n",
            kind.display_name()
        )
        .map_err(|e| anyhow!("Failed to write section heading: {}", e))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn record_for<N>(channel: &N, status: DeliveryStatus) -> DeliveryRecord
where
    N: Notifiable + ?Sized,
{
    DeliveryRecord::new(
        channel.kind(),
        channel.destination().to_string(),
        channel.message().category(),
        channel.priority(),
        status,
    )
}
