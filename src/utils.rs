use crate::channels::notifiable::Notifiable;

pub fn filter_channels<T: Notifiable>(channels: &[Box<dyn Notifiable>]) -> Vec<&T> {
    channels
        .iter()
        .filter_map(|channel| channel.as_any().downcast_ref::<T>())
        .collect()
}
