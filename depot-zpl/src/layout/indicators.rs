//! Cargo condition indicator overlay
//!
//! Up to four extra field blocks stamped onto a cargo label when the cargo
//! carries special conditions. Positions are fixed dot coordinates inside
//! the 719x559 printable area of the 90x70mm stock.

use chrono::{DateTime, NaiveDateTime};
use tracing::debug;

use crate::request::CargoFlags;
use crate::writer::{TextStyle, ZplWriter};

const PRIORITY_POS: (u32, u32) = (560, 240);
const PRIORITY_FONT: u32 = 80;
const PRIORITY_GLYPH: &str = "P";

const SPECIAL_POS: (u32, u32) = (610, 240);
const SPECIAL_FONT: u32 = 80;
const SPECIAL_GLYPH: &str = "M";

const EXPIRATION_POS: (u32, u32) = (210, 300);
const EXPIRATION_FONT: u32 = 30;

const INSTRUCTIONS_POS: (u32, u32) = (210, 380);
const INSTRUCTIONS_FONT: u32 = 25;
const INSTRUCTIONS_MAX: usize = 30;

/// Append the indicator blocks for `flags`. Each indicator is emitted only
/// when its source flag/value is set and usable.
pub fn render(writer: &mut ZplWriter, flags: &CargoFlags) {
    if flags.is_priority {
        writer.text(
            PRIORITY_POS.0,
            PRIORITY_POS.1,
            TextStyle::scalable(PRIORITY_FONT, PRIORITY_FONT),
            PRIORITY_GLYPH,
        );
    }

    if flags.requires_special_handling {
        writer.text(
            SPECIAL_POS.0,
            SPECIAL_POS.1,
            TextStyle::scalable(SPECIAL_FONT, SPECIAL_FONT),
            SPECIAL_GLYPH,
        );
    }

    if let Some(raw) = flags.expiration_date.as_deref()
        && !raw.is_empty()
    {
        match format_expiration(raw) {
            Some(date) => {
                writer.text(
                    EXPIRATION_POS.0,
                    EXPIRATION_POS.1,
                    TextStyle::scalable(EXPIRATION_FONT, EXPIRATION_FONT),
                    &format!("Val:{}", date),
                );
            }
            // Tolerated: an unparsable date drops the indicator, never the
            // label.
            None => debug!(raw, "skipping unparsable expiration date"),
        }
    }

    if let Some(instructions) = flags.handling_instructions.as_deref()
        && !instructions.is_empty()
    {
        writer.text(
            INSTRUCTIONS_POS.0,
            INSTRUCTIONS_POS.1,
            TextStyle::scalable(INSTRUCTIONS_FONT, INSTRUCTIONS_FONT),
            &truncate_instructions(instructions),
        );
    }
}

/// Format an expiration date as `DD/MM/YYYY`.
///
/// ISO-8601 input (anything containing `T`) is parsed with or without a UTC
/// offset; parse failure yields `None`. Input without `T` is assumed
/// pre-formatted and passed through as its first 10 characters, unvalidated.
pub fn format_expiration(raw: &str) -> Option<String> {
    if raw.contains('T') {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.format("%d/%m/%Y").to_string());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.format("%d/%m/%Y").to_string());
        }
        return None;
    }
    Some(raw.chars().take(10).collect())
}

/// Cap handling instructions at 30 characters, marking the cut with an
/// ellipsis.
pub fn truncate_instructions(raw: &str) -> String {
    if raw.chars().count() > INSTRUCTIONS_MAX {
        let mut short: String = raw.chars().take(INSTRUCTIONS_MAX).collect();
        short.push_str("...");
        short
    } else {
        raw.to_string()
    }
}
