//! Icon Sprites - Template Images for Success, Warning and Custom States
//!
//! Icons are small monochrome cell grids, a deliberate low-resolution
//! aesthetic that every surface can render: terminal cells, scaled pixels or
//! vector squares. An icon carries no color of its own; the view tints it
//! with the active style's success/warning color or the tint supplied with a
//! custom presentation.
//!
//! Identity matters more than pixels here. Two icons built from the same rows
//! are still distinct presentations, which is what makes back-to-back custom
//! shows with different images resolve correctly (the later one wins).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Unique identity of an [`Icon`]
///
/// Assigned once at construction and stable for the icon's lifetime. Clones
/// share the identity of the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconId(u64);

impl IconId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }

    /// Get the raw numeric value
    #[must_use]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "icon-{}", self.0)
    }
}

/// Errors produced when constructing an icon from row data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IconError {
    /// The row set was empty or contained only zero-width rows
    #[error("icon '{0}' has no cells")]
    Empty(String),

    /// A row's width differs from the first row's width
    #[error("icon '{name}' row {row} is {found} cells wide, expected {expected}")]
    RaggedRows {
        /// Icon name
        name: String,
        /// Zero-based index of the offending row
        row: usize,
        /// Width of the offending row
        found: usize,
        /// Width of the first row
        expected: usize,
    },
}

/// A monochrome cell-grid icon
///
/// Cells holding a space are empty; any other character is filled. Equality
/// compares identity, not cell data (see module docs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Icon {
    id: IconId,
    name: String,
    rows: Vec<String>,
}

impl Icon {
    /// Build an icon from rows of cells
    ///
    /// # Errors
    ///
    /// Returns [`IconError`] if the rows are empty or not uniformly wide.
    pub fn from_rows(name: impl Into<String>, rows: &[&str]) -> Result<Self, IconError> {
        let name = name.into();
        let expected = rows.first().map_or(0, |row| row.chars().count());
        if expected == 0 {
            return Err(IconError::Empty(name));
        }

        for (index, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != expected {
                return Err(IconError::RaggedRows {
                    name,
                    row: index,
                    found,
                    expected,
                });
            }
        }

        Ok(Self {
            id: IconId::next(),
            name,
            rows: rows.iter().map(|row| (*row).to_string()).collect(),
        })
    }

    /// The icon's unique identity
    #[must_use]
    pub fn id(&self) -> IconId {
        self.id
    }

    /// The icon's human-readable name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in cells
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.chars().count())
    }

    /// Height in cells
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The raw rows of cells
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Whether the cell at (x, y) is filled
    #[must_use]
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.chars().nth(x))
            .is_some_and(|cell| cell != ' ')
    }
}

impl PartialEq for Icon {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Icon {}

const CHECKMARK_ROWS: [&str; 7] = [
    "         #",
    "        ##",
    "       ## ",
    "##    ##  ",
    " ##  ##   ",
    "  ####    ",
    "   ##     ",
];

const WARNING_ROWS: [&str; 7] = [
    "     #     ",
    "    ###    ",
    "   ## ##   ",
    "  ## # ##  ",
    " ##  #  ## ",
    "##       ##",
    "###########",
];

/// The built-in icons backing success and warning presentations
///
/// Loaded once per controller. A malformed built-in asset is a packaging
/// error, so loading fails fast rather than deferring to presentation time.
#[derive(Debug, Clone)]
pub struct BuiltinIcons {
    /// Checkmark shown for success presentations
    pub checkmark: Icon,
    /// Warning triangle shown for warning presentations
    pub warning: Icon,
}

impl BuiltinIcons {
    /// Load the built-in icon assets
    ///
    /// # Panics
    ///
    /// Panics if a built-in asset is malformed. This cannot happen for a
    /// correctly packaged build; the assets are pinned by unit tests.
    #[must_use]
    pub fn load() -> Self {
        let checkmark = Icon::from_rows("checkmark", &CHECKMARK_ROWS)
            .expect("built-in checkmark icon is malformed");
        let warning =
            Icon::from_rows("warning", &WARNING_ROWS).expect("built-in warning icon is malformed");
        Self { checkmark, warning }
    }
}

impl Default for BuiltinIcons {
    fn default() -> Self {
        Self::load()
    }
}
