//! Client side of the character listing API.

mod client;
mod error;
mod query;
mod types;

pub use client::{CharacterApi, HttpCharacterApi};
pub use error::FetchError;
pub use query::{GenderFilter, PageQuery, ParseGenderFilterError};
pub use types::{CharacterSummary, PageResult, Place};
