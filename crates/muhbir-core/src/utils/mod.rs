//! Utility functions

use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string().replace("-", "").to_uppercase()
}

/// Format an object size for display. Bytes below 1 KiB, otherwise KB/MB
/// with two decimals; the boundaries are exclusive-below (1024 bytes is
/// already "1.00 KB").
pub fn format_display_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}

/// File-type label: whatever follows the last `.` in the key, uppercased.
/// Keys without an extension are labeled "unknown".
pub fn file_type_label(key: &str) -> String {
    match key.rsplit_once('.') {
        Some((_, ext)) => ext.to_uppercase(),
        None => "unknown".to_string(),
    }
}

/// Decode an object key as it arrives in upload events: `+` means space,
/// then percent-sequences are decoded. Invalid UTF-8 is replaced rather
/// than rejected.
pub fn decode_object_key(key: &str) -> String {
    let plus_decoded = key.replace('+', " ");
    let bytes = urlencoding::decode_binary(plus_decoded.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Format a datetime for display
pub fn format_display_datetime(dt: &DateTime<Local>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a datetime as a UTC ISO-8601 timestamp
pub fn format_utc_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_display_size() {
        assert_eq!(format_display_size(0), "0 B");
        assert_eq!(format_display_size(500), "500 B");
        assert_eq!(format_display_size(1023), "1023 B");
        assert_eq!(format_display_size(1024), "1.00 KB");
        assert_eq!(format_display_size(1536), "1.50 KB");
        assert_eq!(format_display_size(1024 * 1024 - 1), "1024.00 KB");
        assert_eq!(format_display_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_display_size(2_621_440), "2.50 MB");
    }

    #[test]
    fn test_file_type_label() {
        assert_eq!(file_type_label("invoice.PDF"), "PDF");
        assert_eq!(file_type_label("invoice.pdf"), "PDF");
        assert_eq!(file_type_label("a.b.csv"), "CSV");
        assert_eq!(file_type_label("noext"), "unknown");
        assert_eq!(file_type_label(""), "unknown");
    }

    #[test]
    fn test_decode_object_key() {
        assert_eq!(
            decode_object_key("folder%2Bname/file+1.txt"),
            "folder+name/file 1.txt"
        );
        assert_eq!(decode_object_key("plain/key.pdf"), "plain/key.pdf");
        assert_eq!(decode_object_key("sp%20ace"), "sp ace");
        assert_eq!(decode_object_key(""), "");
    }

    #[test]
    fn test_format_utc_timestamp() {
        let dt = Utc.with_ymd_and_hms(2026, 8, 7, 10, 30, 0).unwrap();
        assert_eq!(format_utc_timestamp(&dt), "2026-08-07T10:30:00.000Z");
    }

    #[test]
    fn test_generate_request_id() {
        let id = generate_request_id();
        assert_eq!(id.len(), 32);
        assert!(!id.contains('-'));
        assert_ne!(id, generate_request_id());
    }
}
