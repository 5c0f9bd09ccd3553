pub mod email;
pub mod notifiable;
pub mod push;
pub mod sms;
