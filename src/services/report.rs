use std::borrow::Cow;

use crate::models::TradeRecord;

/// Literal line that demarcates the start of tabular data in the report
pub const TRADE_LIST_MARKER: &str = "Detailed Trade List";

/// The raw report payload, read from the network exactly once.
///
/// A single immutable byte buffer with two projections: the bytes feed the
/// file download, the text feeds the preview parse. Both steps consume the
/// same already-received body; neither triggers a second fetch.
#[derive(Debug, Clone)]
pub struct ReportBody {
    bytes: Vec<u8>,
}

impl ReportBody {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Scan states for the trade-list extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeSection,
    InSection,
}

/// Extract the ordered trade list from the report text.
///
/// Lines are scanned in order with a two-state machine. The marker line
/// flips the scan into the data section and is itself skipped; there is no
/// transition back, so a second marker occurrence is scanned as a data row.
/// Lines before the marker and blank lines inside the section are dropped.
/// A report without the marker yields an empty list, not an error.
///
/// This is deliberately not a general CSV parser: the report format carries
/// no quoting or escaping, and upgrading the scan would change observable
/// behavior on malformed input.
pub fn extract_trade_list(text: &str) -> Vec<TradeRecord> {
    let mut state = ScanState::BeforeSection;
    let mut trades = Vec::new();

    for line in text.split('\n') {
        match state {
            ScanState::BeforeSection => {
                if line.trim() == TRADE_LIST_MARKER {
                    state = ScanState::InSection;
                }
            }
            ScanState::InSection => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Some(record) = TradeRecord::parse_line(line) {
                    trades.push(record);
                }
            }
        }
    }

    trades
}
