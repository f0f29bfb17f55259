//! # Marza Entry Point
//!
//! ```text
//! $ marza quote --base 400 --logistics 1000
//! Base price          ¥400.00
//! ...
//! Final price         6 808 ₽
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    marza_lib::run().await
}
