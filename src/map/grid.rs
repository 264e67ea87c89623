use crate::io::error::{LevelError, Result};

/// Text tile map held as ordered rows
///
/// Every row is guaranteed to be 7-bit ASCII, so character counts and byte
/// lengths agree. Rows are not required to share a width; row 0 declares the
/// width of the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<String>,
}

impl Grid {
    /// Parse map text into rows
    ///
    /// Rows are separated by `\r\n` or any single line boundary such as `\n`,
    /// `\r` or form feed (see [`is_row_break`]). Line endings are removed and
    /// nothing else is trimmed; a final line ending does not start an extra
    /// row.
    ///
    /// # Errors
    ///
    /// Returns an error if the text has no rows or contains a non-ASCII
    /// character
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_rows(split_rows(text))
    }

    /// Build a grid from already separated rows
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows or any row contains a non-ASCII
    /// character
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<String> = rows.into_iter().map(Into::into).collect();

        if rows.is_empty() {
            return Err(LevelError::EmptyMap { path: None });
        }

        for (row_index, row) in rows.iter().enumerate() {
            if let Some((column, character)) =
                row.chars().enumerate().find(|(_, c)| !c.is_ascii())
            {
                return Err(LevelError::NonAscii {
                    row: row_index,
                    column,
                    character,
                });
            }
        }

        Ok(Self { rows })
    }

    /// Rows in map order
    pub const fn rows(&self) -> &[String] {
        self.rows.as_slice()
    }

    /// Number of rows
    pub const fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width declared by row 0
    pub const fn width(&self) -> usize {
        match self.rows.as_slice().first() {
            Some(row) => row.len(),
            None => 0,
        }
    }

    /// Total number of tiles across all rows
    pub fn body_len(&self) -> usize {
        self.rows.iter().map(String::len).sum()
    }

    /// First row whose width differs from row 0, as `(row, width)`
    pub fn first_ragged_row(&self) -> Option<(usize, usize)> {
        let width = self.width();
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != width)
            .map(|(index, row)| (index, row.len()))
    }

    /// Test if every row has the width of row 0
    pub fn is_rectangular(&self) -> bool {
        self.first_ragged_row().is_none()
    }

    /// Require every row to have the width of row 0
    ///
    /// # Errors
    ///
    /// Returns a shape error naming the first row that disagrees
    pub fn validate_shape(&self) -> Result<()> {
        match self.first_ragged_row() {
            Some((row, found)) => Err(LevelError::RaggedRow {
                row,
                expected: self.width(),
                found,
            }),
            None => Ok(()),
        }
    }
}

/// Split text into rows at line boundaries, dropping the terminators
///
/// Boundaries are `\r\n` and every single-character break recognised by
/// [`is_row_break`]. A trailing boundary does not start an extra row.
pub fn split_rows(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some((index, boundary)) = rest.char_indices().find(|&(_, c)| is_row_break(c)) else {
            return Some(std::mem::take(&mut rest));
        };
        let (row, tail) = rest.split_at(index);
        rest = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.strip_prefix(boundary))
            .unwrap_or(tail);
        Some(row)
    })
}

/// Line boundaries: LF, CR, VT, FF, the file/group/record separators, NEL
/// and the Unicode line and paragraph separators
pub const fn is_row_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
