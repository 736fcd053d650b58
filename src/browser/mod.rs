//! Browser automation module
//!
//! Handles launching and controlling a Chrome/Chromium instance over the
//! DevTools Protocol, plus the bounded waits and click-recovery routines the
//! page objects build on.

mod errors;
mod locator;
mod session;

pub mod recovery;
pub mod waits;

pub use errors::BrowserError;
pub use locator::Locator;
pub use session::{BrowserSession, BrowserSessionConfig};
