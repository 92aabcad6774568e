//! Test Module
//!
//! Cross-module test suite for the TrendDigest core.
//!
//! ## Test Categories
//! - `chat_tests`: generator contract (intent priority, shortcuts, pools, context)
//! - `digest_tests`: news summary and email digest flow
//! - `hub_tests`: query routing and reply augmentation

pub mod hub_tests;
