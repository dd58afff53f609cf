//! Shared test utilities: character fixtures and a scripted API.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use rickview::api::{CharacterApi, CharacterSummary, FetchError, PageQuery, PageResult, Place};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub fn rick() -> CharacterSummary {
    CharacterSummary {
        id: 1,
        name: "Rick Sanchez".to_string(),
        species: "Human".to_string(),
        status: "Alive".to_string(),
        gender: "Male".to_string(),
        image_url: "https://rickandmortyapi.com/api/character/avatar/1.jpeg".to_string(),
        origin: Place {
            name: "Earth (C-137)".to_string(),
        },
        location: Place {
            name: "Citadel of Ricks".to_string(),
        },
    }
}

pub fn character(id: u64, name: &str, gender: &str) -> CharacterSummary {
    CharacterSummary {
        id,
        name: name.to_string(),
        species: "Human".to_string(),
        status: "Alive".to_string(),
        gender: gender.to_string(),
        ..Default::default()
    }
}

pub fn page_of(characters: Vec<CharacterSummary>, total_pages: u32) -> PageResult {
    PageResult {
        characters,
        total_pages,
    }
}

/// One scripted answer.
pub enum Scripted {
    Page(PageResult),
    Fail(FetchError),
    /// Never answers.
    Hang,
}

/// In-memory API that answers from a script and records every query.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    queries: Arc<Mutex<Vec<PageQuery>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, answer: Scripted) -> &Self {
        self.script.lock().push_back(answer);
        self
    }

    pub fn queries(&self) -> Vec<PageQuery> {
        self.queries.lock().clone()
    }
}

impl CharacterApi for ScriptedApi {
    async fn fetch_page(&self, query: PageQuery) -> Result<PageResult, FetchError> {
        self.queries.lock().push(query);
        let answer = self.script.lock().pop_front();
        match answer {
            Some(Scripted::Page(page)) => Ok(page),
            Some(Scripted::Fail(err)) => Err(err),
            Some(Scripted::Hang) => std::future::pending().await,
            None => Ok(PageResult::default()),
        }
    }
}
