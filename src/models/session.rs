//! Session model

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stable per-user identifier (the Telegram chat id)
pub type UserIdentity = i64;

/// Position of a session within the dialogue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    /// Top-level menu
    #[default]
    Entry,
    AwaitingEducation,
    AwaitingCourse,
    SelectGroup,
    SelectFormat,
    /// Navigation menu shown under a rendered schedule
    AwaitingReturn,
    InstructorLookup,
    BuildingLookup,
}

impl State {
    pub const ALL: [State; 8] = [
        State::Entry,
        State::AwaitingEducation,
        State::AwaitingCourse,
        State::SelectGroup,
        State::SelectFormat,
        State::AwaitingReturn,
        State::InstructorLookup,
        State::BuildingLookup,
    ];

    /// Storage name of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Entry => "entry",
            State::AwaitingEducation => "awaiting_education",
            State::AwaitingCourse => "awaiting_course",
            State::SelectGroup => "select_group",
            State::SelectFormat => "select_format",
            State::AwaitingReturn => "awaiting_return",
            State::InstructorLookup => "instructor_lookup",
            State::BuildingLookup => "building_lookup",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored state name is not part of the dialogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownState(pub String);

impl fmt::Display for UnknownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dialogue state '{}'", self.0)
    }
}

impl std::error::Error for UnknownState {}

impl FromStr for State {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownState(s.to_string()))
    }
}

/// Per-user conversation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserIdentity,
    pub state: State,
    pub education_level: Option<String>,
    pub course: Option<String>,
    pub group: Option<String>,
    pub format: Option<String>,
    pub display_name: Option<String>,
}

impl Session {
    /// Fresh session for a user seen for the first time
    pub fn new(user_id: UserIdentity) -> Self {
        Self {
            user_id,
            state: State::Entry,
            education_level: None,
            course: None,
            group: None,
            format: None,
            display_name: None,
        }
    }
}

/// Row layout of the `sessions` table
#[derive(Debug, Clone, FromRow)]
pub struct SessionRow {
    pub user_id: i64,
    pub state: String,
    pub education_level: Option<String>,
    pub course: Option<String>,
    pub group_name: Option<String>,
    pub format: Option<String>,
    pub display_name: Option<String>,
}

impl TryFrom<SessionRow> for Session {
    type Error = UnknownState;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        Ok(Session {
            user_id: row.user_id,
            state: row.state.parse()?,
            education_level: row.education_level,
            course: row.course,
            group: row.group_name,
            format: row.format,
            display_name: row.display_name,
        })
    }
}

/// A message received from the chat transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    pub user_id: UserIdentity,
    pub display_name: Option<String>,
    pub text: String,
}

impl InboundEvent {
    pub fn new(user_id: UserIdentity, text: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: None,
            text: text.into(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}
