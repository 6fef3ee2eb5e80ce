//! End-to-end tests for redesign-gateway
//!
//! These tests call the real OpenAI API and cost money.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - OPENAI_API_KEY: For OpenAI tests

pub mod openai;
