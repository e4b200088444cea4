//! Receipt extraction
//!
//! Converts a receipt image into a candidate transaction via an external
//! generative-AI API. Failure is always recovered locally: the caller sees
//! `None` and no state changes.

pub mod gemini;

pub use gemini::{GeminiConfig, ReceiptScanner};
