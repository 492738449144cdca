use serde::{Deserialize, Serialize};

use crate::api::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Classic,
    Jazz,
    Pop,
    Rock,
    Hiphop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Piano,
    Guitar,
    Drum,
    Organ,
    Clarinet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Slow,
    Medium,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Duration {
    #[serde(rename = "10s")]
    TenSeconds,
    #[serde(rename = "30s")]
    ThirtySeconds,
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "1m30s")]
    OneMinuteThirtySeconds,
    #[serde(rename = "2m")]
    TwoMinutes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicGenerateQuery {
    pub user_id: EntityId,
    pub baby_id: EntityId,
    pub genre: Genre,
    pub instrument: Instrument,
    pub speed: Speed,
    pub duration: Duration,
}

/// Stored music record. `music_url` stays `None` until an external renderer fills it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MusicRecord {
    #[serde(flatten)]
    pub request: MusicGenerateQuery,
    pub music_url: Option<String>,
}

impl MusicRecord {
    pub fn pending(request: MusicGenerateQuery) -> Self {
        Self { request, music_url: None }
    }
}
