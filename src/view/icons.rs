use crate::listing::EntryKind;
use once_cell::sync::Lazy;
use ratatui::style::Color;
use std::collections::HashMap;

/// Marker glyph and color for one entry, looked up from its icon key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconMarker {
    pub glyph: &'static str,
    pub color: Color,
}

const FILE_GLYPH: &str = "•";
const FOLDER_GLYPH: &str = "◆";
const UNKNOWN_GLYPH: &str = "?";

/// Colors for known file extension keys
static FILE_COLORS: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    HashMap::from([
        ("rs", Color::LightRed),
        ("py", Color::Yellow),
        ("js", Color::LightYellow),
        ("ts", Color::LightBlue),
        ("json", Color::Yellow),
        ("toml", Color::LightMagenta),
        ("yml", Color::LightYellow),
        ("yaml", Color::LightYellow),
        ("md", Color::LightCyan),
        ("txt", Color::Gray),
        ("html", Color::LightRed),
        ("css", Color::LightMagenta),
        ("sh", Color::LightGreen),
        ("pdf", Color::Red),
        ("png", Color::Magenta),
        ("jpg", Color::Magenta),
        ("jpeg", Color::Magenta),
        ("gif", Color::Magenta),
        ("svg", Color::Magenta),
        ("zip", Color::Yellow),
        ("gz", Color::Yellow),
        ("tar", Color::Yellow),
        ("lock", Color::DarkGray),
    ])
});

/// Colors for known folder names (folders key on their own name)
static FOLDER_COLORS: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    HashMap::from([
        ("src", Color::LightBlue),
        ("lib", Color::LightBlue),
        ("test", Color::LightGreen),
        ("tests", Color::LightGreen),
        ("doc", Color::LightCyan),
        ("docs", Color::LightCyan),
        ("scripts", Color::LightYellow),
        ("assets", Color::Magenta),
        ("images", Color::Magenta),
        ("config", Color::Gray),
        ("node_modules", Color::DarkGray),
        ("target", Color::DarkGray),
        ("build", Color::DarkGray),
        ("dist", Color::DarkGray),
        (".git", Color::DarkGray),
    ])
});

/// Look up the marker for an entry.
///
/// Keys with no table entry fall back to a neutral marker in the kind's
/// default color; unknown kinds always get the question marker.
pub fn marker_for(kind: EntryKind, key: &str) -> IconMarker {
    match kind {
        EntryKind::File => IconMarker {
            glyph: FILE_GLYPH,
            color: FILE_COLORS.get(key).copied().unwrap_or(Color::Gray),
        },
        EntryKind::Directory => IconMarker {
            glyph: FOLDER_GLYPH,
            color: FOLDER_COLORS.get(key).copied().unwrap_or(Color::Blue),
        },
        EntryKind::Other => IconMarker {
            glyph: UNKNOWN_GLYPH,
            color: Color::DarkGray,
        },
    }
}
