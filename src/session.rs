use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::models::{ResultRow, SearchRequest};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub query: SearchRequest,
    pub related_keywords: Vec<String>,
    pub results: Vec<ResultRow>,
    pub created_at: DateTime<Local>,
}

#[derive(Debug)]
pub struct SessionError(String);

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session storage error: {}", self.0)
    }
}

impl std::error::Error for SessionError {}

#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn save(&self, session: Session) -> Result<(), SessionError>;
    async fn get(&self, session_id: &str) -> Result<Option<Session>, SessionError>;
    async fn remove(&self, session_id: &str) -> Result<(), SessionError>;
}

pub struct InMemorySessionStorage {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }
}

#[async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn save(&self, session: Session) -> Result<(), SessionError> {
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<Session>, SessionError> {
        Ok(self
            .sessions
            .get(session_id)
            .map(|entry| entry.value().clone()))
    }

    async fn remove(&self, session_id: &str) -> Result<(), SessionError> {
        self.sessions.remove(session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Country, TimeRange};
    use crate::search::{build_results, KeywordTable};

    fn sample_session(id: &str) -> Session {
        let query = SearchRequest {
            country: Country::Taiwan,
            category: Category::All,
            time_range: TimeRange::PastDay,
            keyword: "AI".to_string(),
        };
        let related = KeywordTable::builtin().related_keywords(&query.keyword);
        let results = build_results(&query, &related, Local::now());

        Session {
            id: id.to_string(),
            query,
            related_keywords: related,
            results,
            created_at: Local::now(),
        }
    }

    #[tokio::test]
    async fn save_then_get_round_trips() {
        let storage = InMemorySessionStorage::new();

        storage.save(sample_session("s1")).await.unwrap();
        let stored = storage.get("s1").await.unwrap().expect("session should exist");

        assert_eq!(stored.id, "s1");
        assert_eq!(stored.query.keyword, "AI");
        assert_eq!(stored.results.len(), 21);
    }

    #[tokio::test]
    async fn get_unknown_session_is_none() {
        let storage = InMemorySessionStorage::new();

        assert!(storage.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_existing_session() {
        let storage = InMemorySessionStorage::new();

        storage.save(sample_session("s1")).await.unwrap();
        let mut replacement = sample_session("s1");
        replacement.query.keyword = "教育".to_string();
        storage.save(replacement).await.unwrap();

        let stored = storage.get("s1").await.unwrap().expect("session should exist");
        assert_eq!(stored.query.keyword, "教育");
    }

    #[tokio::test]
    async fn remove_clears_session() {
        let storage = InMemorySessionStorage::new();

        storage.save(sample_session("s1")).await.unwrap();
        storage.remove("s1").await.unwrap();

        assert!(storage.get("s1").await.unwrap().is_none());
    }
}
