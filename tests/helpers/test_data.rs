//! Test data: users and message sequences

use imsit_bot::state::vocabulary as vocab;

pub const STUDENT: i64 = 1001;
pub const OTHER_STUDENT: i64 = 1002;

pub const GROUP: &str = "ПИ-24";
pub const OTHER_GROUP: &str = "ИСиТ-24";

/// Messages that take a new user from the main menu to a weekly schedule
pub fn weekly_schedule_flow() -> Vec<&'static str> {
    vec![
        vocab::SCHEDULE,
        vocab::EDUCATION_HIGHER,
        vocab::COURSES[0],
        GROUP,
        vocab::FORMAT_WEEK,
    ]
}
