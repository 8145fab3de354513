//! naborly: neighbourhood board for one region, with a session-local community feed.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
