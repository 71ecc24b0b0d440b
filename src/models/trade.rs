/// One parsed row of the "Detailed Trade List" section.
///
/// Numeric fields that fail to parse carry `f64::NAN` rather than aborting
/// the scan; the renderer tolerates NaN cells. Records live for one render
/// cycle and are replaced wholesale on the next submission.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub date: String,
    pub entry_price: f64,
    pub exit_price: f64,
    pub volume_ratio: f64,
    pub daily_return: f64,
    pub total_return: f64,
}

impl TradeRecord {
    /// Parse one candidate data line into a record.
    ///
    /// The line is split on commas into six positional fields. Returns `None`
    /// for a repeated header row, recognized by the first raw field being
    /// literally `Date`. Missing fields parse as NaN; fields beyond the sixth
    /// are ignored, so a value with an embedded comma silently misaligns the
    /// columns. That degraded behavior is intentional: the report format is
    /// not real CSV (no quoting or escaping).
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split(',');
        let date = fields.next().unwrap_or("");

        if date == "Date" {
            return None;
        }

        Some(Self {
            date: date.to_string(),
            entry_price: parse_numeric_field(fields.next()),
            exit_price: parse_numeric_field(fields.next()),
            volume_ratio: parse_numeric_field(fields.next()),
            daily_return: parse_numeric_field(fields.next()),
            total_return: parse_numeric_field(fields.next()),
        })
    }
}

/// NaN-tolerant field parse. Trimming first keeps parity with lenient
/// float parsing (stray spaces, the CR left by CRLF line endings).
fn parse_numeric_field(field: Option<&str>) -> f64 {
    field
        .and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_line() {
        let record = TradeRecord::parse_line("2024-01-05,100.00,102.50,2.30,2.50,2.50").unwrap();
        assert_eq!(record.date, "2024-01-05");
        assert_eq!(record.entry_price, 100.00);
        assert_eq!(record.exit_price, 102.50);
        assert_eq!(record.volume_ratio, 2.30);
        assert_eq!(record.daily_return, 2.50);
        assert_eq!(record.total_return, 2.50);
    }

    #[test]
    fn test_header_row_is_discarded() {
        let line = "Date,Entry_Price,Exit_Price,Volume_Ratio,Daily_Return,Total_Return";
        assert!(TradeRecord::parse_line(line).is_none());
    }

    #[test]
    fn test_malformed_field_becomes_nan() {
        let record = TradeRecord::parse_line("2024-01-05,abc,102.50,2.30,2.50,2.50").unwrap();
        assert!(record.entry_price.is_nan());
        assert_eq!(record.exit_price, 102.50);
    }

    #[test]
    fn test_missing_fields_become_nan() {
        let record = TradeRecord::parse_line("2024-01-05,100.00").unwrap();
        assert_eq!(record.entry_price, 100.00);
        assert!(record.exit_price.is_nan());
        assert!(record.total_return.is_nan());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let record = TradeRecord::parse_line("2024-01-05,100.00,102.50,2.30,2.50,2.50,99.99")
            .unwrap();
        assert_eq!(record.total_return, 2.50);
    }

    #[test]
    fn test_crlf_line_parses_last_field() {
        let record = TradeRecord::parse_line("2024-01-05,100.00,102.50,2.30,2.50,2.50\r").unwrap();
        assert_eq!(record.total_return, 2.50);
    }
}
