//! Busy indicator shown while a consultation is in flight

pub mod spinner;
