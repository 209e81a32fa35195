//! Display Formatting
//!
//! Small helpers for rendering contract fields in tables and modals.

use chrono::NaiveDateTime;

use crate::models::Contract;

/// Placeholder for missing values
pub const EMPTY: &str = "-";

pub fn format_size(size: u64) -> String {
    if size < 1024 {
        format!("{} B", size)
    } else if size < 1024 * 1024 {
        format!("{:.1} KB", size as f64 / 1024.0)
    } else {
        format!("{:.1} MB", size as f64 / (1024.0 * 1024.0))
    }
}

/// `YYYY-MM-DD HH:MM` for ISO local timestamps, the raw text otherwise
pub fn format_upload_date(raw: Option<&str>) -> String {
    match raw {
        None => EMPTY.to_string(),
        Some(raw) if raw.is_empty() => EMPTY.to_string(),
        Some(raw) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}

pub fn or_empty(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => EMPTY.to_string(),
    }
}

/// Comma-separated party list for the table
pub fn parties(contract: &Contract) -> String {
    let names = contract.variables.party_names();
    if names.is_empty() {
        EMPTY.to_string()
    } else {
        names.join(", ")
    }
}

/// Share of `part` in `total` as a whole percentage
pub fn percent(part: u64, total: u64) -> u64 {
    if total == 0 {
        0
    } else {
        (part * 100 + total / 2) / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContractVariables;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_format_upload_date() {
        assert_eq!(format_upload_date(Some("2024-03-01T09:30:00.123")), "2024-03-01 09:30");
        assert_eq!(format_upload_date(Some("2024-03-01T09:30:00")), "2024-03-01 09:30");
        assert_eq!(format_upload_date(Some("yesterday")), "yesterday");
        assert_eq!(format_upload_date(None), "-");
    }

    #[test]
    fn test_parties_and_placeholders() {
        let mut contract: Contract = serde_json::from_value(serde_json::json!({
            "id": "c-1",
            "extractionStatus": "auto_extracted"
        }))
        .unwrap();
        assert_eq!(parties(&contract), "-");

        contract.variables = ContractVariables {
            party_names: Some(vec!["Acme".to_string(), "Globex".to_string()]),
            ..Default::default()
        };
        assert_eq!(parties(&contract), "Acme, Globex");
        assert_eq!(or_empty(Some("  ")), "-");
        assert_eq!(or_empty(Some("$10")), "$10");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(5, 0), 0);
    }
}
