//! Test helpers shared by the integration tests

#![allow(dead_code)]

use std::collections::HashSet;

use UpdateFixtures::{config::LoggingConfig, utils::logging, MockMessage};

/// Install the test subscriber once per test binary
pub fn init_logging() {
    logging::init_test_logging(&LoggingConfig {
        level: "debug".to_string(),
    });
}

/// Assert that a message carries usable routing identifiers
pub fn assert_routable(message: &MockMessage) {
    assert!(!message.message_id.is_empty(), "message_id should be generated");
    assert!(!message.chat_id.is_empty(), "chat_id should be generated");
    assert_ne!(message.message_id, message.chat_id);
}

/// Collect keys and check none repeat
pub fn assert_all_distinct<'a>(keys: impl IntoIterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for key in keys {
        assert!(seen.insert(key), "duplicate key generated: {}", key);
    }
}
