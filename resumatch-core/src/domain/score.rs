use crate::error::ScreeningError;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Evaluation of one resume, as returned by the scoring service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub file_name: String,

    /// Match score, 0-100
    #[serde(deserialize_with = "deserialize_score")]
    #[schemars(with = "u8")]
    pub score: u8,

    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub education: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub last_position: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
}

impl ScoreRecord {
    pub fn new(file_name: impl Into<String>, score: u8) -> Self {
        Self {
            file_name: file_name.into(),
            score: score.min(100),
            skills: Vec::new(),
            experience: String::new(),
            education: String::new(),
            last_position: String::new(),
            location: String::new(),
        }
    }

    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = experience.into();
        self
    }

    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = education.into();
        self
    }

    pub fn with_last_position(mut self, last_position: impl Into<String>) -> Self {
        self.last_position = last_position.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn band(&self) -> MatchBand {
        MatchBand::from_score(self.score)
    }
}

/// The service reports similarity with two decimals; the table shows whole
/// percentages clamped to 0-100. Truncating keeps `raw >= 80` equivalent to
/// `score >= 80`, so bands match the unrounded value.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() {
        return Err(serde::de::Error::custom("score must be a finite number"));
    }
    Ok(raw.floor().clamp(0.0, 100.0) as u8)
}

/// Details the service could not extract may come back as `null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One row of the result list. Files the service could not read come back
/// with an error instead of a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ScoreEntry {
    Scored(ScoreRecord),
    Unprocessed {
        #[serde(rename = "fileName")]
        file_name: String,
        error: String,
    },
}

impl ScoreEntry {
    pub fn file_name(&self) -> &str {
        match self {
            ScoreEntry::Scored(record) => &record.file_name,
            ScoreEntry::Unprocessed { file_name, .. } => file_name,
        }
    }

    pub fn record(&self) -> Option<&ScoreRecord> {
        match self {
            ScoreEntry::Scored(record) => Some(record),
            ScoreEntry::Unprocessed { .. } => None,
        }
    }
}

impl From<ScoreRecord> for ScoreEntry {
    fn from(record: ScoreRecord) -> Self {
        ScoreEntry::Scored(record)
    }
}

/// Qualitative grade shown next to each score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum MatchBand {
    /// 80 and above
    Excellent,
    /// 60 to 79
    Good,
    /// Below 60
    Low,
}

impl MatchBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            MatchBand::Excellent
        } else if score >= 60 {
            MatchBand::Good
        } else {
            MatchBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchBand::Excellent => "Excellent Match",
            MatchBand::Good => "Good Match",
            MatchBand::Low => "Low Match",
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            MatchBand::Excellent => "excellent",
            MatchBand::Good => "good",
            MatchBand::Low => "low",
        }
    }
}

/// Raw HTTP reply handed back by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Success payload of the scoring endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreResponse {
    pub scores: Vec<ScoreEntry>,
}

impl ScoreResponse {
    /// Turn a reply into the result list.
    ///
    /// Non-2xx replies become [`ScreeningError::Server`] with the body as-is;
    /// a 2xx body without a `scores` list becomes
    /// [`ScreeningError::MalformedResponse`].
    pub fn from_reply(reply: &HttpReply) -> Result<Vec<ScoreEntry>, ScreeningError> {
        if !reply.is_success() {
            return Err(ScreeningError::Server {
                status: reply.status,
                body: reply.body.clone(),
            });
        }

        let response: ScoreResponse = serde_json::from_str(&reply.body)?;
        Ok(response.scores)
    }
}
