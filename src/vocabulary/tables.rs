//! Built-in enumeration data
//!
//! Generic codes match the robota.ua API, which is why robota.ua needs no
//! separate code maps.

pub(super) const CITIES: &[(u32, &str)] = &[
    (0, "ALL_UKRAINE"),
    (1, "KYIV"),
    (2, "LVIV"),
    (3, "ODESA"),
    (4, "DNIPRO"),
    (5, "VINNYTSIA"),
    (9, "ZAPORIZHIA"),
    (10, "IVANO_FRANKIVSK"),
    (11, "KROPYVNYTSKYI"),
    (14, "LUTSK"),
    (15, "MYKOLAIV"),
    (17, "POLTAVA"),
    (18, "RIVNE"),
    (19, "SUMY"),
    (20, "TERNOPIL"),
    (21, "KHARKIV"),
    (22, "KHERSON"),
    (23, "KHMELNYTSKYI"),
    (24, "CHERKASY"),
    (25, "CHERNIHIV"),
    (26, "CHERNIVTSI"),
    (28, "UZHHOROD"),
    (34, "OTHER"),
];

pub(super) const EDUCATION: &[(u32, &str)] = &[
    (0, "ANY"),
    (1, "HIGHER"),
    (2, "INCOMPLETE_HIGHER"),
    (3, "VOCATIONAL"),
    (4, "SECONDARY"),
    (5, "MBA"),
];

pub(super) const SCHEDULES: &[(u32, &str)] = &[
    (0, "ANY"),
    (1, "FULLTIME"),
    (2, "PARTIAL"),
    (3, "REMOTE"),
    (4, "INTERNSHIP"),
    (5, "PROJECT"),
    (6, "SEASONAL"),
];

pub(super) const PERIODS: &[(u32, &str)] = &[
    (1, "TODAY"),
    (2, "THREE_DAYS"),
    (3, "WEEK"),
    (4, "MONTH"),
    (7, "THREE_MONTH"),
    (5, "YEAR"),
    (6, "ALL"),
];

pub(super) const EXPERIENCE: &[(u32, &str)] = &[
    (6, "ANY"),
    (0, "NO_EXPERIENCE"),
    (1, "UP_TO_1_YEAR"),
    (2, "FROM_1_TO_2"),
    (3, "FROM_2_TO_5"),
    (4, "FROM_5_TO_10"),
    (5, "MORE_THAN_10"),
];

pub(super) const LANGUAGES: &[(u32, &str)] = &[
    (1, "ENGLISH"),
    (2, "GERMAN"),
    (3, "FRENCH"),
    (4, "SPANISH"),
    (5, "ITALIAN"),
    (101, "AZERBAIJANI"),
    (102, "ALBANIAN"),
    (103, "ARABIC"),
    (104, "ARMENIAN"),
    (105, "AFRIKANER"),
    (106, "BASHKIR"),
    (107, "BELARUSIAN"),
    (108, "BULGARIAN"),
    (109, "HUNGARIAN"),
    (110, "VIETNAMESE"),
    (111, "DUTCH"),
    (112, "GREEK"),
    (113, "GEORGIAN"),
    (114, "DANISH"),
    (115, "HEBREW"),
    (116, "INDONESIAN"),
    (117, "KAZAKH"),
    (118, "KIRGHIZ"),
    (119, "CHINESE"),
    (120, "KOMI"),
    (121, "KOREAN"),
    (122, "KURD"),
    (123, "LETTISH"),
    (124, "LITHUANIAN"),
    (125, "MACEDONIAN"),
    (126, "MOLDAVIAN"),
    (127, "MONGOLIAN"),
    (128, "NORWEGIAN"),
    (129, "PERSIAN"),
    (130, "POLISH"),
    (131, "PORTUGUESE"),
    (132, "ROMANIAN"),
    (133, "RUSSIAN"),
    (134, "SANSKRIT"),
    (135, "SERBIAN"),
    (136, "SLOVAK"),
    (137, "SLOVENIAN"),
    (138, "SWAHILI"),
    (139, "TAJIK"),
    (140, "THAI"),
    (141, "TATAR"),
    (142, "TURKISH"),
    (143, "TURKMEN"),
    (144, "UZBEK"),
    (145, "UKRAINIAN"),
    (146, "URDU"),
    (147, "FINNISH"),
    (148, "HINDI"),
    (149, "CROATIAN"),
    (150, "CHECHEN"),
    (151, "CZECH"),
    (152, "CHUVASH"),
    (153, "SWEDISH"),
    (154, "ESTONIAN"),
    (155, "JAPANESE"),
    (156, "TELUGU"),
];

pub(super) const LANGUAGE_LEVELS: &[(u32, &str)] = &[
    (1, "ELEMENTARY"),
    (2, "LOWER_INTERMEDIATE"),
    (3, "INTERMEDIATE"),
    (6, "UPPER_INTERMEDIATE"),
    (4, "ADVANCED"),
    (5, "FLUENT"),
    (7, "NATIVE"),
];

// work.ua

pub(super) const WORK_UA_EXPERIENCE: &[(u32, u32)] = &[
    (6, 2),
    (0, 0),
    (1, 1),
    (2, 164),
    (3, 165),
    (4, 166),
    (5, 166),
];

pub(super) const WORK_UA_LANGUAGES: &[(u32, u32)] = &[
    (1, 1),
    (2, 2),
    (4, 4),
    (3, 5),
    (5, 18),
    (133, 32),
    (145, 41),
];

pub(super) const WORK_UA_LANGUAGE_LEVELS: &[(u32, u32)] = &[
    (1, 83),
    (2, 83),
    (3, 84),
    (6, 22835),
    (4, 85),
    (5, 22836),
    (7, 22836),
];

pub(super) const WORK_UA_SALARY: &[(u64, u32)] = &[
    (0, 0),
    (1, 1),
    (10_000, 2),
    (15_000, 3),
    (20_000, 4),
    (30_000, 5),
    (40_000, 6),
    (50_000, 7),
    (100_000, 8),
];
