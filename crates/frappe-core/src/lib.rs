pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod key;
pub mod layout;
pub mod movement;
pub mod resolver;
pub mod scorer;
pub mod util;
