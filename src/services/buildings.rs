//! Building directory
//!
//! Campus buildings are addressed by their number, 1 through 8.

use crate::models::MediaRef;
use crate::utils::helpers::parse_code_in_range;

/// Highest building number
pub const MAX_BUILDING_CODE: u8 = 8;

/// Description and photos of one building
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    pub code: u8,
    pub description: String,
    pub photos: Vec<MediaRef>,
}

// (code, description, photo file ids)
const BUILDINGS: &[(u8, &str, &str, &str)] = &[
    (1, "Это наш главный корпус\nОриентиром тут послужит огромная парковка(курилка)\nАдрес: Зиповская, д.5", "AgACAgIAAxkBAAIMGGezl2jvC2ayVe3mLgMYwXFasFu2AAIJ6jEbElWZSSNHfcCmQC5DAQADAgADeQADNgQ", "AgACAgIAAxkBAAIMGmezl3wqE1b3QeT8-dcyzK_3fV1uAAIK6jEbElWZSeHvxteiCh53AQADAgADeQADNgQ"),
    (2, "Второй корпус или (Сбербанк)\nНаходится на пересечении зиповской и московской. А наш ориентир это компьютерный клуб Fenix\nАдрес: Зиповская 8", "AgACAgIAAxkBAAIMHGezl4EBvKI8oDrhd-1BowtoOdaXAAIL6jEbElWZSXNaIW1dEbN3AQADAgADeQADNgQ", "AgACAgIAAxkBAAIMHmezl4TKiWxTBBCpxje-a0mrZrFdAAIM6jEbElWZSanwqQY42zwPAQADAgADeQADNgQ"),
    (3, "Третий корпус\nНаходится за трамвайными путями по правой стороне\nАдрес: Зиповская 12", "AgACAgIAAxkBAAIMIGezl4ilhBlCPHXLOjJDgw0Jsl1WAAIN6jEbElWZSYM8NJomN7cjAQADAgADeQADNgQ", "AgACAgIAAxkBAAIMImezl4vq1hZcGzxjsHc2OhkR2T6GAAIO6jEbElWZSXtrNqSuGZE8AQADAgADeQADNgQ"),
    (4, "Четвертый корпус\nНаш ориентир это SubWay а точнее слева от него\nАдрес: Зиповская 5/2", "AgACAgIAAxkBAAIMJGezl41-B1WQR58j6hmA2UofC5KBAAIP6jEbElWZSR0J-RkHYC4uAQADAgADeQADNgQ", "AgACAgIAAxkBAAIMKGezl5MOOzeENlVFHs_4OBT7FDxxAAIQ6jEbElWZSVYDwTwZvotcAQADAgADeQADNgQ"),
    (5, "Пятый корпус (школа)\nНаходится в пристройке бывшей гимназии имсит. Но только не путай: наш вход с торца, а не главный\nАдрес: Зиповская 8", "AgACAgIAAxkBAAIMKmezl6KaBTFwpQ7yg2dfZmblKod6AAIR6jEbElWZSVPbb9zz5qnyAQADAgADeQADNgQ", "AgACAgIAAxkBAAIMLGezl6ZXWMGczOSPJM_u07L8yWMfAAIS6jEbElWZSYIvWM7Sy1obAQADAgADeQADNgQ"),
    (6, "Шестой корпус(Дизайнеры)\nнаходится за углом от мфц напротив входа в главный корпус\nАдрес: Зиповская 5к1", "AgACAgIAAxkBAAIMLmezl6keJdC81C60nlfGHnMTGCA2AAIT6jEbElWZSX8RQz9bs9sUAQADAgADeQADNgQ", "AgACAgIAAxkBAAIMMGezl6yQZVNzQilooWyezBIjyW8XAAIU6jEbElWZSRLQzWyvE7vuAQADAgADeQADNgQ"),
    (7, "Седьмой корпус\nНаходится сразу за главным", "AgACAgIAAxkBAAIMsGe0YjrPKP6gsXW3DirbQL5nnHggAAKl6DEbcu2oSfG8npWC0fCrAQADAgADeQADNgQ", "AgACAgIAAxkBAAIMrme0YddRwEUphXHrn57bARP2EVE0AAKd6DEbcu2oSW71UXvpQVQ3AQADAgADeQADNgQ"),
    (8, "Восьмой корпус\nнаходится слева от корпуса пять в здании гимназии\nАдрес: Зиповская 3", "AgACAgIAAxkBAAIMKmezl6KaBTFwpQ7yg2dfZmblKod6AAIR6jEbElWZSVPbb9zz5qnyAQADAgADeQADNgQ", "AgACAgIAAxkBAAIMNGezl7O4RORY0x7-mcw3Oxb1t0yIAAIV6jEbElWZSSclYr8g5AsbAQADAgADeQADNgQ"),
];

/// Lookup of campus buildings by number
#[derive(Debug, Clone)]
pub struct BuildingDirectory {
    buildings: Vec<Building>,
}

impl BuildingDirectory {
    /// Directory with the built-in building table
    pub fn new() -> Self {
        let buildings = BUILDINGS
            .iter()
            .map(|(code, description, first, second)| Building {
                code: *code,
                description: description.to_string(),
                photos: [first, second]
                    .into_iter()
                    .filter(|id| !id.is_empty())
                    .map(|id| MediaRef::new(*id))
                    .collect(),
            })
            .collect();

        Self { buildings }
    }

    /// Building for a code typed by the user
    ///
    /// Only the exact digits `1`..`8` match.
    pub fn lookup(&self, code: &str) -> Option<&Building> {
        let code = parse_code_in_range(code, MAX_BUILDING_CODE)?;
        self.buildings.iter().find(|building| building.code == code)
    }
}

impl Default for BuildingDirectory {
    fn default() -> Self {
        Self::new()
    }
}
