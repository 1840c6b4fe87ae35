// src/config/consts.rs

// Column classification (lowercase, matched as substrings of the header)
pub const FLOOR_KEYS: &[&str] = &["emelet"];
pub const AVAILABILITY_KEYS: &[&str] = &["elér", "eler"];
pub const AREA_KEYS: &[&str] = &["m2", "négy"];
pub const PRICE_KEYS: &[&str] = &["ár", "ar", "ft"];

// Rendering
pub const MILLION_COLUMNS: &[usize] = &[4, 5];
pub const MILLION: f64 = 1_000_000.0;
pub const DASH: &str = "-";
pub const FLOOR_GROUND: &str = "FSZ";
pub const FLOOR_FIRST: &str = "I.";
pub const FLOOR_SECOND: &str = "II.";
pub const NO_DATA: &str = "Nincs elérhető adat.";
pub const TABLE_ID: &str = "lakasok";

// Served when the sheet cannot be loaded
pub const FALLBACK_HEADERS: &[&str] = &[
    "Lakás",
    "m2",
    "Erkély m2",
    "Kert m2",
    "Szerk.kész ár",
    "Kulcsrakész ár",
    "Emelet",
    "Elérhető",
];

// Net
/// Published sheet, CSV export. Used when neither the config nor the CLI names a source.
pub const DEFAULT_SOURCE_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQvWULapiVzfWP2xf3zkbMeS8NXwx7DeRWq2_w0eiEmFo1C9Hk7U1hAruMsI6pTtqFvyv7t5k_MHOn9/pub?output=csv";
pub const USER_AGENT: &str = concat!("aptable/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT_SECS: u64 = 30;

// Navigation
pub const SCROLL_THRESHOLD: f32 = 48.0;

// Local files
pub const CONFIG_FILE: &str = "aptable.cfg";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "aptable.log";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "lakasok";
