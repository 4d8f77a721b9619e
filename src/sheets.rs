use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("sheets api key is not configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Network(String),
    #[error("sheet request returned status {0}")]
    Status(u16),
    #[error("could not decode sheet values: {0}")]
    Decode(String),
}

/// Body of `GET .../values/{range}`. Sheets omits `values` when the range is empty.
#[derive(Deserialize, Debug, Default)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub business_name: String,
    pub image_url: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogoItem {
    pub image_url: String,
    pub website_url: Option<String>,
}

impl LogoItem {
    /// Link target for the logo, with `https://` added when the sheet stores a bare domain.
    pub fn href(&self) -> Option<String> {
        self.website_url.as_deref().map(|url| {
            if has_scheme(url, "http://") || has_scheme(url, "https://") {
                url.to_string()
            } else {
                format!("https://{}", url)
            }
        })
    }
}

fn has_scheme(url: &str, scheme: &str) -> bool {
    url.get(..scheme.len())
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case(scheme))
}

pub fn values_url(sheet_id: &str, sheet: &str, range: &str, api_key: &str) -> String {
    format!(
        "{}/{}/values/{}!{}?key={}",
        config::SHEETS_API_BASE,
        sheet_id,
        urlencoding::encode(sheet),
        range,
        urlencoding::encode(api_key),
    )
}

async fn fetch_values(sheet: &str, range: &str) -> Result<Vec<Vec<Value>>, SheetError> {
    let api_key = config::sheets_api_key().ok_or(SheetError::MissingApiKey)?;
    let url = values_url(config::sheet_id(), sheet, range, api_key);
    log::debug!("Fetching sheet {}!{}", sheet, range);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| SheetError::Network(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SheetError::Network(e.to_string()))?;
    into_values(ok, status, &body)
}

/// Maps a values response onto its rows. A non-success status wins over the body.
pub fn into_values(ok: bool, status: u16, body: &str) -> Result<Vec<Vec<Value>>, SheetError> {
    if !ok {
        return Err(SheetError::Status(status));
    }
    let range: ValueRange =
        serde_json::from_str(body).map_err(|e| SheetError::Decode(e.to_string()))?;
    Ok(range.values)
}

pub async fn fetch_projects() -> Result<Vec<Project>, SheetError> {
    let rows = fetch_values(config::PROJECTS_SHEET, config::PROJECTS_RANGE).await?;
    let projects = parse_projects(&rows);
    log::info!("Loaded {} projects ({} rows)", projects.len(), rows.len());
    Ok(projects)
}

pub async fn fetch_logos() -> Result<Vec<LogoItem>, SheetError> {
    let rows = fetch_values(config::LOGOS_SHEET, config::LOGOS_RANGE).await?;
    let logos = parse_logos(&rows);
    log::info!("Loaded {} logos ({} rows)", logos.len(), rows.len());
    Ok(logos)
}

/// Rows are `[business, image, description]`; all three are required.
pub fn parse_projects(rows: &[Vec<Value>]) -> Vec<Project> {
    rows.iter()
        .filter_map(|row| {
            Some(Project {
                business_name: cell(row, 0)?,
                image_url: cell(row, 1)?,
                description: cell(row, 2)?,
            })
        })
        .collect()
}

/// Rows are `[image, website]`; the website column may be blank.
pub fn parse_logos(rows: &[Vec<Value>]) -> Vec<LogoItem> {
    rows.iter()
        .filter_map(|row| {
            Some(LogoItem {
                image_url: cell(row, 0)?,
                website_url: cell(row, 1),
            })
        })
        .collect()
}

pub fn find_project<'a>(projects: &'a [Project], business_name: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.business_name == business_name)
}

// Sheets trims trailing empty cells, so short rows are common.
fn cell(row: &[Value], index: usize) -> Option<String> {
    let text = match row.get(index)? {
        Value::String(s) => s.clone(),
        Value::Null => return None,
        other => other.to_string(),
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> Vec<Vec<Value>> {
        serde_json::from_value::<ValueRange>(json!({ "values": value }))
            .unwrap()
            .values
    }

    #[test]
    fn projects_map_positionally() {
        let projects = parse_projects(&rows(json!([
            ["Cafe Luna", "https://img/luna.png", "Sitio web y menú digital"],
        ])));
        assert_eq!(
            projects,
            vec![Project {
                business_name: "Cafe Luna".into(),
                image_url: "https://img/luna.png".into(),
                description: "Sitio web y menú digital".into(),
            }]
        );
    }

    #[test]
    fn incomplete_project_rows_are_dropped() {
        let projects = parse_projects(&rows(json!([
            ["Only name"],
            ["Name", "img"],
            ["", "img", "desc"],
            ["Name", "   ", "desc"],
            [],
            ["Kept", "img", "desc", "extra column"],
        ])));
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].business_name, "Kept");
    }

    #[test]
    fn logos_keep_optional_website() {
        let logos = parse_logos(&rows(json!([
            ["https://img/a.png", "a.com"],
            ["https://img/b.png"],
            ["", "c.com"],
        ])));
        assert_eq!(logos.len(), 2);
        assert_eq!(logos[0].website_url.as_deref(), Some("a.com"));
        assert_eq!(logos[1].website_url, None);
    }

    #[test]
    fn logo_href_adds_scheme() {
        let bare = LogoItem { image_url: "i".into(), website_url: Some("tienda.hn".into()) };
        let full = LogoItem { image_url: "i".into(), website_url: Some("http://tienda.hn".into()) };
        assert_eq!(bare.href().as_deref(), Some("https://tienda.hn"));
        assert_eq!(full.href().as_deref(), Some("http://tienda.hn"));
    }

    #[test]
    fn logo_href_scheme_is_case_insensitive() {
        let upper = LogoItem { image_url: "i".into(), website_url: Some("HTTPS://tienda.hn".into()) };
        let mixed = LogoItem { image_url: "i".into(), website_url: Some("Http://tienda.hn".into()) };
        let short = LogoItem { image_url: "i".into(), website_url: Some("ht".into()) };
        assert_eq!(upper.href().as_deref(), Some("HTTPS://tienda.hn"));
        assert_eq!(mixed.href().as_deref(), Some("Http://tienda.hn"));
        assert_eq!(short.href().as_deref(), Some("https://ht"));
    }

    #[test]
    fn error_status_is_reported() {
        let err = into_values(false, 403, r#"{"error":{"code":403}}"#).unwrap_err();
        assert!(matches!(err, SheetError::Status(403)));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = into_values(true, 200, "<html>not json</html>").unwrap_err();
        assert!(matches!(err, SheetError::Decode(_)));
        let err = into_values(true, 200, r#"{"values":"nope"}"#).unwrap_err();
        assert!(matches!(err, SheetError::Decode(_)));
    }

    #[test]
    fn ok_body_yields_rows() {
        let rows = into_values(true, 200, r#"{"values":[["a","b","c"]]}"#).unwrap();
        assert_eq!(parse_projects(&rows).len(), 1);
        assert!(into_values(true, 200, "{}").unwrap().is_empty());
    }

    #[test]
    fn missing_values_field_is_empty() {
        let body: ValueRange = serde_json::from_str(r#"{"range":"LOGOS!B2:C1000"}"#).unwrap();
        assert!(parse_logos(&body.values).is_empty());
    }

    #[test]
    fn numeric_cells_become_text() {
        let projects = parse_projects(&rows(json!([[2024, "img", "desc"]])));
        assert_eq!(projects[0].business_name, "2024");
    }

    #[test]
    fn find_returns_first_match() {
        let projects = parse_projects(&rows(json!([
            ["Dup", "first", "d"],
            ["Dup", "second", "d"],
        ])));
        assert_eq!(find_project(&projects, "Dup").unwrap().image_url, "first");
        assert!(find_project(&projects, "Missing").is_none());
    }

    #[test]
    fn url_targets_values_endpoint() {
        let url = values_url("SHEET", "LOGOS", "B2:C1000", "KEY");
        assert_eq!(
            url,
            "https://sheets.googleapis.com/v4/spreadsheets/SHEET/values/LOGOS!B2:C1000?key=KEY"
        );
    }
}
