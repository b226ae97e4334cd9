//! Route handlers
//!
//! - health: liveness check
//! - hello: fixed greeting
//! - items: go-category item listing

pub mod health;
pub mod hello;
pub mod items;
