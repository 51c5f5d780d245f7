//! Shared utility modules used across textvec components.

pub mod hash;
