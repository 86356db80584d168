#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, dead_code, deprecated)]

mod common;

mod check;
mod generate;
