//! Fixed button labels and bot phrases
//!
//! Menu input is matched against these labels exactly, so the keyboards and
//! the transition table must share them.

pub const START: &str = "/start";
pub const BACK: &str = "⬅️Назад";
pub const HOME: &str = "〽️Начало";

// Entry menu
pub const SCHEDULE: &str = "🗓Расписание🗓";
pub const FIND_INSTRUCTOR: &str = "👱‍♂️Найти препода👱";
pub const FIND_BUILDING: &str = "🏢Найти корпус🏫";

// Education levels
pub const EDUCATION_HIGHER: &str = "Высшее";
pub const EDUCATION_SECONDARY: &str = "Среднее";
pub const EDUCATION_LEVELS: [&str; 2] = [EDUCATION_HIGHER, EDUCATION_SECONDARY];

pub const COURSES: [&str; 4] = ["🤓 1 курс", "😎 2 курс", "🧐 3 курс", "🎓 4 курс"];

pub const FORMAT_WEEK: &str = "📅 На неделю";
pub const FORMAT_TODAY: &str = "📌 На сегодня";

// Navigation under a rendered schedule
pub const RETURN_COURSE: &str = "📚 Курс";
pub const RETURN_GROUP: &str = "🏫 Группа";
pub const RETURN_FORMAT: &str = "📋 Вывод";
pub const RETURN_EDUCATION: &str = "🎓Образование";

pub mod phrases {
    pub const GREETING: &str = "Привет, Я бот для помощи тебе в твоем обучении!";
    pub const USE_KEYBOARD: &str = "Используй клавиатуру";
    pub const USE_KEYBOARD_FOR_THIS: &str = "Используй для этого клавиатуру";
    pub const PRESS_BUTTON: &str = "Нажми кнопочку на клавиатуре";
    pub const PRESS_MENU_BUTTON: &str = "Нажми кнопку на клавиатуре";
    pub const PRESS_DIGIT: &str = "Нажми цифру на клавиатуре";
    pub const CHOOSE_EDUCATION: &str = "Выбери форму обучения";
    pub const CHOOSE_EDUCATION_AGAIN: &str = "Выберите форму обучения:";
    pub const CHOOSE_COURSE: &str = "Выбери курс:";
    pub const CHOOSE_COURSE_AGAIN: &str = "Выберите курс:";
    pub const CHOOSE_GROUP: &str = "Выберите группу:";
    pub const CHOOSE_FORMAT: &str = "Выбери формат вывода";
    pub const CHOOSE_FORMAT_AGAIN: &str = "Выберите формат вывода:";
    pub const ASK_SURNAME: &str = "Напиши фамилию преподавателя в формате (Иванов)";
    pub const ASK_BUILDING: &str = "Напиши номер корпуса";
    pub const TRY_AGAIN: &str = "Попробуем снова";
    pub const TRY_ONCE_MORE: &str = "Попробуем еще раз";
    pub const ANYTHING_ELSE: &str = "Чем еще помочь?";

    /// Reply for a surname that is not in the directory
    pub fn instructor_not_found(surname: &str) -> String {
        format!("Преподаватель {} не найден", surname)
    }
}
