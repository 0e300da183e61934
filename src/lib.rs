//! Turns one Lodestone character profile into a census record: identity, job levels,
//! minion and mount collections, purchase history badges and an activity status.

pub mod activity;
pub mod badges;
pub mod builder;
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod settings;

pub use builder::RecordBuilder;
pub use error::{GatherError, ParseError};
pub use model::{CharacterRecord, CharacterStatus};
