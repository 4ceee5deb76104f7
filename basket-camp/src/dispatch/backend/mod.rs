//! Dispatch backends

pub mod console;
pub mod emailjs;
