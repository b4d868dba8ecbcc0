//! Dialogue transition table
//!
//! `apply` is a function of the session, the input text and the static
//! directories only. It mutates the session and says what to reply; lookups
//! that need the schedule service come back as deferred [`Reply`] values for
//! the engine to resolve.

use crate::models::{Directive, Keyboard, Session, State, group_sheet};
use crate::services::{BuildingDirectory, Instructor, InstructorDirectory};
use super::vocabulary::{self as vocab, phrases};

/// What the engine should send in response to one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Ready to deliver
    Send(Directive),
    /// Render the schedule for the selection and show the return menu
    Schedule {
        group: String,
        format: String,
        education_level: String,
    },
    /// Show an instructor card with the current lesson
    InstructorCard(Instructor),
}

impl Reply {
    fn text(body: impl Into<String>, keyboard: Option<Keyboard>) -> Self {
        Reply::Send(Directive::text(body, keyboard))
    }
}

/// State reached with the back button, for states that have one
pub fn previous(state: State) -> Option<State> {
    match state {
        State::AwaitingEducation => Some(State::Entry),
        State::AwaitingCourse => Some(State::Entry),
        State::SelectGroup => Some(State::AwaitingCourse),
        State::SelectFormat => Some(State::SelectGroup),
        _ => None,
    }
}

/// Keyboard listing the groups of the session's course, if it has one
fn groups_keyboard(session: &Session) -> Option<Keyboard> {
    group_sheet(session.education_level.as_deref(), session.course.as_deref())
        .map(|sheet| Keyboard::Groups { sheet })
}

fn schedule_reply(session: &Session) -> Reply {
    Reply::Schedule {
        group: session.group.clone().unwrap_or_default(),
        format: session.format.clone().unwrap_or_default(),
        education_level: session.education_level.clone().unwrap_or_default(),
    }
}

/// Apply one input to a session
pub fn apply(
    session: &mut Session,
    input: &str,
    instructors: &InstructorDirectory,
    buildings: &BuildingDirectory,
) -> Vec<Reply> {
    match session.state {
        State::Entry => entry(session, input),
        State::AwaitingEducation => awaiting_education(session, input),
        State::AwaitingCourse => awaiting_course(session, input),
        State::SelectGroup => select_group(session, input),
        State::SelectFormat => select_format(session, input),
        State::AwaitingReturn => awaiting_return(session, input),
        State::InstructorLookup => instructor_lookup(session, input, instructors),
        State::BuildingLookup => building_lookup(session, input, buildings),
    }
}

fn entry(session: &mut Session, input: &str) -> Vec<Reply> {
    match input {
        vocab::SCHEDULE => {
            if session.education_level.is_none() {
                session.state = State::AwaitingEducation;
                vec![Reply::text(phrases::CHOOSE_EDUCATION, Some(Keyboard::Education))]
            } else {
                session.state = State::AwaitingCourse;
                vec![Reply::text(phrases::CHOOSE_COURSE, Some(Keyboard::Course))]
            }
        }
        vocab::FIND_INSTRUCTOR => {
            session.state = State::InstructorLookup;
            vec![Reply::text(phrases::ASK_SURNAME, None)]
        }
        vocab::FIND_BUILDING => {
            session.state = State::BuildingLookup;
            vec![Reply::text(phrases::ASK_BUILDING, Some(Keyboard::Building))]
        }
        vocab::START => vec![Reply::text(phrases::GREETING, Some(Keyboard::Entry))],
        _ => vec![Reply::text(phrases::USE_KEYBOARD, Some(Keyboard::Entry))],
    }
}

fn awaiting_education(session: &mut Session, input: &str) -> Vec<Reply> {
    if vocab::EDUCATION_LEVELS.contains(&input) {
        session.education_level = Some(input.to_string());
        session.state = State::AwaitingCourse;
        return vec![Reply::text(phrases::CHOOSE_COURSE, Some(Keyboard::Course))];
    }

    if input == vocab::BACK {
        session.state = State::Entry;
        return vec![Reply::text(phrases::TRY_AGAIN, Some(Keyboard::Entry))];
    }

    vec![Reply::text(phrases::USE_KEYBOARD_FOR_THIS, Some(Keyboard::Education))]
}

fn awaiting_course(session: &mut Session, input: &str) -> Vec<Reply> {
    if input == vocab::BACK {
        session.state = State::Entry;
        return vec![Reply::text(phrases::TRY_ONCE_MORE, Some(Keyboard::Entry))];
    }

    if vocab::COURSES.contains(&input) {
        session.course = Some(input.to_string());
        session.state = State::SelectGroup;
        return vec![Reply::text(phrases::CHOOSE_GROUP, groups_keyboard(session))];
    }

    vec![Reply::text(phrases::PRESS_BUTTON, Some(Keyboard::Course))]
}

fn select_group(session: &mut Session, input: &str) -> Vec<Reply> {
    if input == vocab::BACK {
        session.state = State::AwaitingCourse;
        return vec![Reply::text(phrases::CHOOSE_COURSE, Some(Keyboard::Course))];
    }

    session.group = Some(input.to_string());

    // A format chosen in an earlier lookup stays selected.
    if session.format.is_none() {
        session.state = State::SelectFormat;
        vec![Reply::text(phrases::CHOOSE_FORMAT, Some(Keyboard::Format))]
    } else {
        session.state = State::AwaitingReturn;
        vec![schedule_reply(session)]
    }
}

fn select_format(session: &mut Session, input: &str) -> Vec<Reply> {
    if input == vocab::BACK {
        session.state = State::SelectGroup;
        return vec![Reply::text(phrases::CHOOSE_GROUP, groups_keyboard(session))];
    }

    session.format = Some(input.to_string());
    session.state = State::AwaitingReturn;
    vec![schedule_reply(session)]
}

fn awaiting_return(session: &mut Session, input: &str) -> Vec<Reply> {
    let (next, reply) = match input {
        vocab::RETURN_COURSE => (
            State::AwaitingCourse,
            Reply::text(phrases::CHOOSE_COURSE_AGAIN, Some(Keyboard::Course)),
        ),
        vocab::RETURN_GROUP => (
            State::SelectGroup,
            Reply::text(phrases::CHOOSE_GROUP, groups_keyboard(session)),
        ),
        vocab::RETURN_FORMAT => (
            State::SelectFormat,
            Reply::text(phrases::CHOOSE_FORMAT_AGAIN, Some(Keyboard::Format)),
        ),
        vocab::RETURN_EDUCATION => (
            State::AwaitingEducation,
            Reply::text(phrases::CHOOSE_EDUCATION_AGAIN, Some(Keyboard::Education)),
        ),
        vocab::HOME => (
            State::Entry,
            Reply::text(phrases::ANYTHING_ELSE, Some(Keyboard::Entry)),
        ),
        _ => (
            State::AwaitingReturn,
            Reply::text(phrases::PRESS_MENU_BUTTON, Some(Keyboard::Return)),
        ),
    };

    session.state = next;
    vec![reply]
}

fn instructor_lookup(session: &mut Session, input: &str, instructors: &InstructorDirectory) -> Vec<Reply> {
    session.state = State::Entry;

    match instructors.find(input) {
        Some(instructor) => vec![
            Reply::InstructorCard(instructor.clone()),
            Reply::text(phrases::ANYTHING_ELSE, Some(Keyboard::Entry)),
        ],
        None => vec![Reply::text(phrases::instructor_not_found(input), Some(Keyboard::Entry))],
    }
}

fn building_lookup(session: &mut Session, input: &str, buildings: &BuildingDirectory) -> Vec<Reply> {
    if let Some(building) = buildings.lookup(input) {
        return vec![Reply::Send(Directive::media(
            building.description.clone(),
            building.photos.clone(),
        ))];
    }

    if input == vocab::HOME {
        session.state = State::Entry;
        return vec![Reply::text(phrases::ANYTHING_ELSE, Some(Keyboard::Entry))];
    }

    vec![Reply::text(phrases::PRESS_DIGIT, Some(Keyboard::Building))]
}
