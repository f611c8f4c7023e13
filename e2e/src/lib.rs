//! WebDriver page objects for the GgT Digital site.
//!
//! The navigation test in `tests/` is `#[ignore]`d: it needs the site served
//! (`dx serve --platform web`) and a WebDriver server (e.g. `chromedriver --port=4444`).
//! Run it with `cargo test -p ggt-e2e -- --ignored`.

pub mod pages;
pub mod session;

pub use session::{E2eError, Session, SessionConfig};
