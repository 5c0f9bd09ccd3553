pub mod delivery;
pub mod kind;
pub mod message;
pub mod priority;
pub mod status;
pub mod validation;
