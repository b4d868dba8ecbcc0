//! Instructor directory
//!
//! Static staff table with photo references and the key under which the
//! schedule service knows each instructor.

use crate::models::MediaRef;
use crate::utils::helpers::names_match;

/// One instructor card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    pub surname: String,
    pub given_names: String,
    /// Short biography or quote, may be empty
    pub bio: String,
    /// Key for the current-lesson lookup
    pub lesson_key: String,
    pub photo: MediaRef,
}

impl Instructor {
    pub fn new(
        surname: impl Into<String>,
        given_names: impl Into<String>,
        bio: impl Into<String>,
        lesson_key: impl Into<String>,
        photo: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            given_names: given_names.into(),
            bio: bio.into(),
            lesson_key: lesson_key.into(),
            photo: MediaRef::new(photo),
        }
    }

    /// Display name: surname followed by given names
    pub fn display_name(&self) -> String {
        format!("{} {}", self.surname, self.given_names)
    }

    /// Card caption, with the current lesson appended when known
    pub fn caption(&self, current_lesson: Option<&str>) -> String {
        let mut caption = self.display_name();
        if !self.bio.is_empty() {
            caption.push('\n');
            caption.push_str(&self.bio);
        }
        if let Some(lesson) = current_lesson.filter(|l| !l.is_empty()) {
            caption.push_str("\n\n");
            caption.push_str(lesson);
        }
        caption
    }
}

// (surname, given names, bio, lesson key, photo file id)
const STAFF: &[(&str, &str, &str, &str, &str)] = &[
    ("Алферова", "Виктория Владимировна", "", "Алферова В.В.", "AgACAgIAAxkBAAIOHme8ytmQ1f6dRjoigmVnB-azy2q-AAL56TEbC8foSdNXDDhCe2yLAQADAgADeAADNgQ"),
    ("Горшунова", "Ирина Викторовна", "", "Горшунова И.В.", "AgACAgIAAxkBAAIOHGe8ytWh3tvkFVcQTDj6etlRQIjFAAL46TEbC8foSdmGXPnGCO9rAQADAgADbQADNgQ"),
    ("Грицык", "Екатерина Анатольевна", "", "Грицык Е.А.", "AgACAgIAAxkBAAIOXGfBnKJ_8CP1tcQMuwtNS5UvuyYbAAQyG3x4CEpRY5rjNSC1RgEAAwIAA3gAAzYE"),
    ("Ермишина", "Елена Борисовна", "", "Ермишина Е.Б.", "AgACAgIAAxkBAAIOGme8ytG6vNxgm0H6_BKb1C4D1_jjAAL36TEbC8foSUx-MBsodlbNAQADAgADbQADNgQ"),
    ("Исикова", "Наталья Павловна", "", "Исикова Н.П.", "AgACAgIAAxkBAAIMNmezmT7YAAEqdtrdnsyxthVXcIpXkQACG-oxGxJVmUmH2790Gsk02QEAAwIAA3gAAzYE"),
    ("Капустин", "Сергей Алимович", "", "Капустин С.А.", "AgACAgIAAxkBAAIMOGezmUNy7-P1qPUbzX-zvJZpCDlXAAIc6jEbElWZSUrTgjBDMLcyAQADAgADeAADNgQ"),
    ("Клинов", "Анатолий Сергеевич", "", "Клинов А.С.", "AgACAgIAAxkBAAIOMGe8yuipJqfXy6HHyp1usA-xrN_zAAID6jEbC8foSYvLDEW8SUTLAQADAgADbQADNgQ"),
    ("Корольков", "Роман Александрович", "", "Корольков Р.А.", "AgACAgIAAxkBAAIMOmezmUZ-z617n98jMe5eWb96E9cRAAId6jEbElWZSXFSc6GY1FlbAQADAgADeAADNgQ"),
    ("Леонова", "Ирина Васильевна", "", "Леонова И.В.", "AgACAgIAAxkBAAIMPGezmUksjTkGpbk3P7wCkKjsqiq1AAJv7TEblnyYSUK42azDmqI_AQADAgADbQADNgQ"),
    ("Леонтьев", "Николай Александрович", "", "Леонтьев Н.А.", "AgACAgIAAxkBAAIMPmezmU3Ue3s6Prhr5NOU8XP7ua_xAAIe6jEbElWZSbr6QpAnQXhNAQADAgADbQADNgQ"),
    ("Лисин", "Денис Александрович", "", "Лисин Д.А.", "AgACAgIAAxkBAAIMQGezmU9JRyFR5q5la9Q0y1BJ4YbaAAIf6jEbElWZSd6hNsrCiQABBAEAAwIAA3gAAzYE"),
    ("Лихачева", "Ольга Николаевна", "", "Лихачева О.Н.", "AgACAgIAAxkBAAIOMme8yukxrkZ2dWSR19I-mRsH1x_xAAIE6jEbC8foSSAHwNPqwSjGAQADAgADbQADNgQ"),
    ("Мадатова", "Оксана Владимировна", "", "Мадатова О.В.", "AgACAgIAAxkBAAIOLme8yuZRbgJjke0QrGX-fBi3ilSGAAIB6jEbC8foSVwsJ_64JO_vAQADAgADbQADNgQ"),
    ("Мироненко", "Дмитрий Сергеевич", "", "Мироненко Д.С.", "AgACAgIAAxkBAAIOXmfBnKdPJ-v6JT4F74i-3UrVEctiAAIBAAEyG3x4CEr7fmiYatCHrgEAAwIAA3kAAzYE"),
    ("Нигматов", "Вадим Азамович", "«Сомнение — мой верный спутник, оно помогает мне не разочаровываться в людях».", "Нигматов В.А.", "AgACAgIAAxkBAAIMRGezmVeY978Wpwwy1iCoxQFtBwJsAAIh6jEbElWZSRvymxV2Fx-HAQADAgADeAADNgQ"),
    ("Нестерова", "Нонна Семеновна", "", "Нестерова Н.С.", "AgACAgIAAxkBAAIMQmezmVKygv4Y_SK-bvl3U6cK-T2WAAIg6jEbElWZSWI2mjpgjbaIAQADAgADbQADNgQ"),
    ("Обухова", "Юлия Александровна", "", "Обухова Ю.А.", "AgACAgIAAxkBAAIOYWfBnT2PSjbpAyGPzhvkYh3wZhTaAAL37DEbfHgQSpJq7W3984CKAQADAgADeAADNgQ"),
    ("Пальников", "Александр Валерьевич", "", "Пальников А.В.", "AgACAgIAAxkBAAIMRmezmVpLm_wlh25TL6zTZBiDdouMAAIi6jEbElWZSc_EMTQqesWjAQADAgADeAADNgQ"),
    ("Пархоменко", "Алина Андреевна", "", "Пархоменко А.А.", "AgACAgIAAxkBAAIOLGe8yuS3-5eCJdhF5P6Vox-u_BeDAAPqMRsLx-hJ8S4zzs8j0qwBAAMCAANtAAM2BA"),
    ("Петров", "Игорь Федорович", "", "Петров И.Ф.", "AgACAgIAAxkBAAIOKme8yuKei1zpaU8WWpDvRKahSq_OAAL_6TEbC8foSRe92_iLrvkvAQADAgADbQADNgQ"),
    ("Петрова", "Софья Игоревна", "", "Петрова С.И.", "AgACAgIAAxkBAAIOKGe8yuHDFwa6q32z1AnnVTGyLAI0AAL-6TEbC8foSW6n4KllkgABYgEAAwIAA20AAzYE"),
    ("Петросян", "Арутюн Микаэлович", "Характер Скверный.\nНе женат.", "Петросян А.М.", "AgACAgIAAxkBAAIMSGezmV0vPmKQlgEFZO6ozLKx297NAAIj6jEbElWZSXPVRgYbsQNRAQADAgADeAADNgQ"),
    ("Рассоха", "Евгений Викторович", "", "Рассоха Е.В.", "AgACAgIAAxkBAAIOJme8yt8yQxuoKj5dEXTIbvokwgtZAAL96TEbC8foSTx1D4hM8L8wAQADAgADeAADNgQ"),
    ("Саакян", "Рустам Рафикович", "", "Саакян Р.Р.", "AgACAgIAAxkBAAIMSmezmWBaaE7RNDpmwAqtKhFiPN9VAAIk6jEbElWZSRBfFV1TAljKAQADAgADeAADNgQ"),
    ("Сапунов", "Андрей Владимирович", "", "Сапунов А.В.", "AgACAgIAAxkBAAIOJGe8yt7WB9PQ0sr5u1GCaPb9SufkAAL86TEbC8foSWwOHpsMrf6cAQADAgADbQADNgQ"),
    ("Сорокина", "Виктория Владимировна", "", "Сорокина В.В.", "AgACAgIAAxkBAAIMTGezmWRAxRePB2mwIkmcEZ1wPY0sAAIl6jEbElWZSQr0LfHFrR0SAQADAgADeAADNgQ"),
    ("Субачев", "Сергей Юрьевич", "", "Субачев С.Ю.", "AgACAgIAAxkBAAIOIme8ytz0K9oLZp__VTJy-PLhfq0UAAL76TEbC8foST4rSYi18YZCAQADAgADbQADNgQ"),
    ("Тиньгаев", "Евгений Геннадьевич", "", "Тиньгаев Е.Г.", "AgACAgIAAxkBAAIOIGe8ytuW-QABLhGbI6nD55peX07Y3QAC-ukxGwvH6Em5q3kqB2ZcIQEAAwIAA20AAzYE"),
    ("Цебренко", "Константин Николаевич", "", "Цебренко К.Н.", "AgACAgIAAxkBAAIMTmezmWhi_-hUIPuPqtpbpXvnY_90AAIm6jEbElWZSRe1fE_tcLobAQADAgADbQADNgQ"),
    ("Шепель", "Элона Вячеславна", "", "Шепель Э.В.", "AgACAgIAAxkBAAIMUGezmWuDiv8jn3RDLS6DBs-YDBQlAAIn6jEbElWZSQVKZPG2xV7jAQADAgADbQADNgQ"),
    ("Шпехт", "Ирина Александровна", "", "Шпехт И.А.", "AgACAgIAAxkBAAIMUmezmW6A4N4dH-AFyJOvvdaSMFBVAAIo6jEbElWZSS1D7zxsY7koAQADAgADeAADNgQ"),
];

/// Lookup of instructors by surname
#[derive(Debug, Clone)]
pub struct InstructorDirectory {
    instructors: Vec<Instructor>,
}

impl InstructorDirectory {
    /// Directory with the built-in staff table
    pub fn new() -> Self {
        Self::from_instructors(
            STAFF
                .iter()
                .map(|(surname, names, bio, key, photo)| Instructor::new(*surname, *names, *bio, *key, *photo))
                .collect(),
        )
    }

    pub fn from_instructors(instructors: Vec<Instructor>) -> Self {
        Self { instructors }
    }

    /// Find an instructor by surname, ignoring case and diacritics
    ///
    /// Entries without a photo cannot be shown and are treated as absent.
    pub fn find(&self, surname: &str) -> Option<&Instructor> {
        self.instructors
            .iter()
            .find(|instructor| names_match(&instructor.surname, surname))
            .filter(|instructor| !instructor.photo.as_str().is_empty())
    }

    pub fn len(&self) -> usize {
        self.instructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructors.is_empty()
    }
}

impl Default for InstructorDirectory {
    fn default() -> Self {
        Self::new()
    }
}
