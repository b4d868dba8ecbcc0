//! Outbound directives
//!
//! The engine decides what to say; the transport decides how to deliver it.

use serde::{Deserialize, Serialize};
use crate::state::vocabulary::*;

/// Reference to a photo already uploaded to the transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef(pub String);

impl MediaRef {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self(file_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One of the fixed reply keyboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Keyboard {
    Entry,
    Education,
    Course,
    /// Groups of one course, identified by its sheet number
    Groups { sheet: u8 },
    Format,
    Return,
    Building,
}

/// Group sheets: higher education courses 1..4 map to sheets 1..4,
/// secondary education courses 1..4 map to sheets 7..10.
const GROUP_SHEETS: [(u8, &[&str]); 8] = [
    (1, &["ИСиТ-24", "ПИ-24", "Юр-24", "Эк-24", "Диз-24"]),
    (2, &["ИСиТ-23", "ПИ-23", "Юр-23", "Эк-23", "Диз-23"]),
    (3, &["ИСиТ-22", "ПИ-22", "Юр-22", "Эк-22", "Диз-22"]),
    (4, &["ИСиТ-21", "ПИ-21", "Юр-21", "Эк-21", "Диз-21"]),
    (7, &["СПО-ИС-24", "СПО-Пр-24", "СПО-Юр-24"]),
    (8, &["СПО-ИС-23", "СПО-Пр-23", "СПО-Юр-23"]),
    (9, &["СПО-ИС-22", "СПО-Пр-22", "СПО-Юр-22"]),
    (10, &["СПО-ИС-21", "СПО-Пр-21", "СПО-Юр-21"]),
];

const GROUPS_PER_ROW: usize = 3;

/// Sheet holding the groups for an education level and course, if any
pub fn group_sheet(education: Option<&str>, course: Option<&str>) -> Option<u8> {
    let course_index = COURSES.iter().position(|c| Some(*c) == course)? as u8;
    match education? {
        EDUCATION_HIGHER => Some(course_index + 1),
        EDUCATION_SECONDARY => Some(course_index + 7),
        _ => None,
    }
}

/// Group names listed on a sheet
pub fn groups_on_sheet(sheet: u8) -> &'static [&'static str] {
    GROUP_SHEETS
        .iter()
        .find(|(id, _)| *id == sheet)
        .map(|(_, groups)| *groups)
        .unwrap_or(&[])
}

fn row(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

impl Keyboard {
    /// Ordered button-label rows for the transport to render
    pub fn rows(&self) -> Vec<Vec<String>> {
        match self {
            Keyboard::Entry => vec![
                row(&[SCHEDULE]),
                row(&[FIND_INSTRUCTOR, FIND_BUILDING]),
            ],
            Keyboard::Education => vec![
                row(&EDUCATION_LEVELS),
                row(&[BACK]),
            ],
            Keyboard::Course => vec![
                row(&COURSES[..2]),
                row(&COURSES[2..]),
                row(&[BACK]),
            ],
            Keyboard::Groups { sheet } => {
                let mut rows: Vec<Vec<String>> = groups_on_sheet(*sheet)
                    .chunks(GROUPS_PER_ROW)
                    .map(row)
                    .collect();
                rows.push(row(&[BACK]));
                rows
            }
            Keyboard::Format => vec![
                row(&[FORMAT_WEEK, FORMAT_TODAY]),
                row(&[BACK]),
            ],
            Keyboard::Return => vec![
                row(&[RETURN_COURSE, RETURN_GROUP, RETURN_FORMAT]),
                row(&[RETURN_EDUCATION, HOME]),
            ],
            Keyboard::Building => vec![
                row(&["1", "2", "3", "4"]),
                row(&["5", "6", "7", "8"]),
                row(&[HOME]),
            ],
        }
    }
}

/// Something the transport should send to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directive {
    Text {
        body: String,
        keyboard: Option<Keyboard>,
    },
    /// A photo album; the caption goes on the first photo
    Media {
        caption: String,
        media: Vec<MediaRef>,
    },
}

impl Directive {
    pub fn text(body: impl Into<String>, keyboard: Option<Keyboard>) -> Self {
        Directive::Text {
            body: body.into(),
            keyboard,
        }
    }

    pub fn media(caption: impl Into<String>, media: Vec<MediaRef>) -> Self {
        Directive::Media {
            caption: caption.into(),
            media,
        }
    }
}
