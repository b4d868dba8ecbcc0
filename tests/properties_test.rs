//! Property tests for the transition table

use imsit_bot::models::{Session, State};
use imsit_bot::services::{BuildingDirectory, InstructorDirectory};
use imsit_bot::state::vocabulary as vocab;
use imsit_bot::state::{apply, previous};
use proptest::prelude::*;

fn any_state() -> impl Strategy<Value = State> {
    prop::sample::select(State::ALL.to_vec())
}

fn maybe(values: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(values.to_vec()).prop_map(str::to_string))
}

fn any_session() -> impl Strategy<Value = Session> {
    (
        any_state(),
        maybe(&vocab::EDUCATION_LEVELS),
        maybe(&vocab::COURSES),
        maybe(&["ПИ-24", "Юр-22", "СПО-ИС-23"]),
        maybe(&[vocab::FORMAT_WEEK, vocab::FORMAT_TODAY]),
    )
        .prop_map(|(state, education_level, course, group, format)| Session {
            user_id: 7,
            state,
            education_level,
            course,
            group,
            format,
            display_name: None,
        })
}

fn any_input() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            vocab::START,
            vocab::BACK,
            vocab::HOME,
            vocab::SCHEDULE,
            vocab::FIND_INSTRUCTOR,
            vocab::FIND_BUILDING,
            vocab::EDUCATION_HIGHER,
            vocab::COURSES[2],
            vocab::FORMAT_TODAY,
            vocab::RETURN_COURSE,
            vocab::RETURN_GROUP,
            vocab::RETURN_FORMAT,
            vocab::RETURN_EDUCATION,
            "Петросян",
            "3",
            "9",
        ])
        .prop_map(str::to_string),
        ".{0,12}",
    ]
}

proptest! {
    #[test]
    fn replaying_an_event_is_deterministic(session in any_session(), input in any_input()) {
        let instructors = InstructorDirectory::new();
        let buildings = BuildingDirectory::new();

        let mut first = session.clone();
        let mut second = session;
        let first_replies = apply(&mut first, &input, &instructors, &buildings);
        let second_replies = apply(&mut second, &input, &instructors, &buildings);

        prop_assert_eq!(first_replies, second_replies);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn back_returns_to_previous_state(session in any_session()) {
        let instructors = InstructorDirectory::new();
        let buildings = BuildingDirectory::new();

        if let Some(target) = previous(session.state) {
            let mut after = session.clone();
            apply(&mut after, vocab::BACK, &instructors, &buildings);

            prop_assert_eq!(after.state, target);
            // Back only moves; selections are kept
            prop_assert_eq!(after.education_level, session.education_level);
            prop_assert_eq!(after.course, session.course);
            prop_assert_eq!(after.group, session.group);
            prop_assert_eq!(after.format, session.format);
        }
    }

    #[test]
    fn every_input_gets_a_reply(session in any_session(), input in any_input()) {
        let mut session = session;
        let replies = apply(&mut session, &input, &InstructorDirectory::new(), &BuildingDirectory::new());
        prop_assert!(!replies.is_empty());
    }
}
