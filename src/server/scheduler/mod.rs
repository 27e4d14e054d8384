//! Cron jobs run by the bot process.

pub mod cleanup;
