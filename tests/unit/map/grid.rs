//! Tests for row splitting, ASCII validation and shape inspection

#[cfg(test)]
mod tests {
    use levelpack::map::grid::{Grid, is_row_break, split_rows};
    use levelpack::{ErrorKind, LevelError};

    // Rows come out in order with dimensions taken from row 0
    // Verified by reversing the row order in parse
    #[test]
    fn test_parse_basic_grid() {
        let grid = Grid::parse("GGSS\nWWMM").unwrap();

        assert_eq!(grid.rows(), ["GGSS", "WWMM"]);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.body_len(), 8);
        assert!(grid.is_rectangular());
    }

    // A final newline ends the last row instead of starting a new one
    // Verified by emitting a row after the final boundary
    #[test]
    fn test_trailing_newline() {
        let grid = Grid::parse("....\n....\n").unwrap();
        assert_eq!(grid.row_count(), 2);
    }

    // CRLF, LF and lone CR all terminate rows
    // Verified by only splitting on '\n'
    #[test]
    fn test_line_endings() {
        let crlf = Grid::parse("GG\r\nSS\r\n").unwrap();
        assert_eq!(crlf.rows(), ["GG", "SS"]);

        let cr = Grid::parse("GG\rSS\r").unwrap();
        assert_eq!(cr.rows(), ["GG", "SS"]);

        let mixed = Grid::parse("a\nb\r\nc\rd").unwrap();
        assert_eq!(mixed.rows(), ["a", "b", "c", "d"]);
    }

    // Vertical tab, form feed and the ASCII separators also end rows
    // Verified by only treating '\n' and '\r' as boundaries
    #[test]
    fn test_other_line_boundaries() {
        let grid = Grid::parse("GG\x0cGG").unwrap();
        assert_eq!(grid.rows(), ["GG", "GG"]);
        assert_eq!(grid.width(), 2);

        let grid = Grid::parse("a\x0bb\x1cc\x1dd\x1ee").unwrap();
        assert_eq!(grid.rows(), ["a", "b", "c", "d", "e"]);
    }

    // Unicode line separators split rows instead of failing as non-ASCII
    // Verified by removing NEL and U+2028 from the boundary set
    #[test]
    fn test_unicode_line_boundaries() {
        let grid = Grid::parse("GG\u{2028}SS\u{85}WW\u{2029}").unwrap();
        assert_eq!(grid.rows(), ["GG", "SS", "WW"]);
    }

    // Blank interior lines are rows of width zero
    // Verified by filtering empty lines
    #[test]
    fn test_blank_rows_are_kept() {
        let grid = Grid::parse("GG\n\nSS").unwrap();
        assert_eq!(grid.rows(), ["GG", "", "SS"]);
        assert_eq!(grid.first_ragged_row(), Some((1, 0)));

        let single = Grid::parse("\n").unwrap();
        assert_eq!(single.row_count(), 1);
        assert_eq!(single.width(), 0);
    }

    // Leading and trailing spaces are part of the row
    // Verified by trimming each line
    #[test]
    fn test_whitespace_preserved() {
        let grid = Grid::parse("  G \n\tS").unwrap();
        assert_eq!(grid.rows(), ["  G ", "\tS"]);
        assert_eq!(grid.width(), 4);
    }

    // Empty input is an input error, not an empty level
    // Verified by returning an empty grid
    #[test]
    fn test_empty_text_rejected() {
        let error = Grid::parse("").unwrap_err();
        assert!(matches!(error, LevelError::EmptyMap { path: None }));
        assert_eq!(error.kind(), ErrorKind::Input);

        assert!(Grid::from_rows(Vec::<String>::new()).is_err());
    }

    // The first non-ASCII character is reported with its position
    // Verified by reporting the byte offset instead of the character index
    #[test]
    fn test_non_ascii_rejected() {
        let error = Grid::parse("ab\ncdé.ü").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Encoding);
        match error {
            LevelError::NonAscii {
                row,
                column,
                character,
            } => {
                assert_eq!(row, 1);
                assert_eq!(column, 2);
                assert_eq!(character, 'é');
            }
            other => unreachable!("Expected NonAscii, got {other:?}"),
        }
    }

    // Ragged rows are detected and reported against row 0
    // Verified by comparing against the previous row instead of row 0
    #[test]
    fn test_ragged_rows() {
        let grid = Grid::parse("GGGG\nGGGG\nGG\nGGGGG").unwrap();

        assert!(!grid.is_rectangular());
        assert_eq!(grid.first_ragged_row(), Some((2, 2)));
        assert_eq!(grid.body_len(), 15);

        match grid.validate_shape().unwrap_err() {
            LevelError::RaggedRow {
                row,
                expected,
                found,
            } => {
                assert_eq!((row, expected, found), (2, 4, 2));
            }
            other => unreachable!("Expected RaggedRow, got {other:?}"),
        }
    }

    // Rectangular grids pass shape validation
    // Verified by making validate_shape always fail
    #[test]
    fn test_rectangular_validates() {
        let grid = Grid::from_rows(["ab", "cd", "ef"]).unwrap();
        assert!(grid.validate_shape().is_ok());
    }

    // Consecutive carriage returns produce an empty row between them
    // Verified by stripping every trailing '\r'
    #[test]
    fn test_split_rows_double_carriage_return() {
        let rows: Vec<&str> = split_rows("a\r\r\n").collect();
        assert_eq!(rows, ["a", ""]);

        let none: Vec<&str> = split_rows("").collect();
        assert!(none.is_empty());

        let blanks: Vec<&str> = split_rows("\n\n").collect();
        assert_eq!(blanks, ["", ""]);

        assert!(is_row_break('\x0c'));
        assert!(!is_row_break('\t'));
        assert!(!is_row_break('\x1f'));
    }
}
