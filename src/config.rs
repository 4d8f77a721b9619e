use log::Level;

pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send/";

pub const PROJECTS_SHEET: &str = "COLABORACION";
pub const PROJECTS_RANGE: &str = "B2:D100";
pub const LOGOS_SHEET: &str = "LOGOS";
pub const LOGOS_RANGE: &str = "B2:C1000";

pub const CONTACT_PHONE: &str = "+504 8885-7653";
pub const CONTACT_EMAIL: &str = "visonixro@gmail.com";

const DEFAULT_SHEET_ID: &str = "1IdSe25kB0DaySe7lzs2Ao7tRseXTD7N00Oapiu-2x1E";
const DEFAULT_WHATSAPP_NUMBER: &str = "50488857653";

/// Spreadsheet holding the `COLABORACION` and `LOGOS` sheets.
/// Override at build time with `VISONIXRO_SHEET_ID`.
pub fn sheet_id() -> &'static str {
    non_empty(option_env!("VISONIXRO_SHEET_ID")).unwrap_or(DEFAULT_SHEET_ID)
}

/// Sheets API key, injected at build time through `VISONIXRO_SHEETS_API_KEY`.
/// Returns `None` when the build was made without one.
pub fn sheets_api_key() -> Option<&'static str> {
    non_empty(option_env!("VISONIXRO_SHEETS_API_KEY"))
}

/// Number that receives the WhatsApp hand-off messages (digits only).
pub fn whatsapp_number() -> &'static str {
    non_empty(option_env!("VISONIXRO_WHATSAPP_NUMBER")).unwrap_or(DEFAULT_WHATSAPP_NUMBER)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_overrides_fall_back() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(Some(" abc ")), Some("abc"));
    }

    #[test]
    fn whatsapp_number_is_digits() {
        assert!(whatsapp_number().chars().all(|c| c.is_ascii_digit()));
    }
}
