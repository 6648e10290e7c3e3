//! Output formatting for submission outcomes

pub mod console;
