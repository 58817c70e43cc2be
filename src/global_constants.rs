#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "MSFS Geoshot";
pub const APPLICATION_DIRECTORY: &str = "msfs-geoshot";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_ENCODER: &str = "[ENCODER]";
pub const LOG_TAG_LOCATOR: &str = "[LOCATOR]";
pub const LOG_TAG_TELEMETRY: &str = "[TELEMETRY]";
pub const LOG_TAG_EXIF: &str = "[EXIF]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const MESSAGE_CAPTURE_SAVED: &str = "screenshot saved";
pub const MESSAGE_CAPTURE_UNTAGGED: &str = "screenshot saved without location data";
pub const MESSAGE_CAPTURE_METADATA_FAILED: &str = "screenshot saved but location data could not be written";
pub const MESSAGE_CAPTURE_FAILED: &str = "screenshot failed";
pub const MESSAGE_TARGET_WINDOW_MISSING: &str = "simulator window not found, capturing primary display anyway";

pub const ERROR_CONTEXT_ENUMERATE_MONITORS: &str = "Unable to enumerate monitors";
pub const ERROR_CONTEXT_NO_MONITOR: &str = "No monitor available to capture";
pub const ERROR_CONTEXT_CAPTURE_MONITOR: &str = "Unable to capture Monitor";
pub const ERROR_CONTEXT_ENUMERATE_WINDOWS: &str = "Unable to enumerate windows";

pub const DEFAULT_TARGET_PROCESS_NAME: &str = "FlightSimulator.exe";
pub const DEFAULT_FILE_NAME_FORMAT: &str = "MSFS_{date}";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d-%H%M%S";
pub const DEFAULT_TELEMETRY_TIMEOUT_MS: u64 = 2000;

pub const FILE_NAME_FIELD_DATE: &str = "date";
pub const FILE_NAME_FIELD_FORMAT: &str = "format";

pub const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query={latitude},{longitude}";

pub const KNOTS_TO_KILOMETERS_PER_HOUR: f64 = 1.852;

pub const SETTINGS_FILE_NAME: &str = "settings.json";
