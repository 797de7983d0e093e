//! Helpers for end-to-end tests: a spawned `web` server and a headless browser.

pub mod browser;
pub mod test_server;
