//! Chat endpoint contracts and lightweight test adapters.

pub mod service;
