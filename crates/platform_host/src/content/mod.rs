//! Static content document contracts and lightweight test adapters.

pub mod source;
