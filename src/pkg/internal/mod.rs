pub mod adaptors;
pub mod auth;
pub mod categorize;
pub mod filter;
pub mod gate;
pub mod policy;
pub mod saved;
pub mod seed;
pub mod storage;
