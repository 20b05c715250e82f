//! End-to-end tests against the real OpenAI API
//!
//! Ignored by default. Run with
//! `OPENAI_API_KEY=... cargo test -- --ignored e2e`.

pub mod openai;
