use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]{8,}$").unwrap());

/// Format produced by `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Today is accepted, anything earlier (or unparsable) is not.
pub fn is_valid_date(date: &str, today: NaiveDate) -> bool {
    parse_date(date).map_or(false, |d| d >= today)
}

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ventas@visonixro.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+504 9999-9999"));
        assert!(is_valid_phone("(504) 9999 9999"));
        assert!(is_valid_phone("99999999"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("999-999"));
        assert!(!is_valid_phone("++50499999999"));
        assert!(!is_valid_phone("9999-9999 ext"));
    }

    #[test]
    fn date_not_before_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let fmt = |d: NaiveDate| d.format(DATE_FORMAT).to_string();

        assert!(!is_valid_date(&fmt(today - Duration::days(1)), today));
        assert!(is_valid_date(&fmt(today), today));
        assert!(is_valid_date(&fmt(today + Duration::days(30)), today));
        assert!(!is_valid_date("14/10/2026", today));
        assert!(!is_valid_date("", today));
    }
}
