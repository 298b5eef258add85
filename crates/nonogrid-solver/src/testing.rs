//! ASCII fixtures shared by the solver tests.

use nonogrid_core::Picture;

/// Parses rows of `#` (filled) and `.` (empty) into a [`Picture`].
///
/// # Panics
///
/// Panics on any other character or on ragged rows.
pub(crate) fn picture(rows: &[&str]) -> Picture {
    Picture::from_rows(rows.iter().map(|row| {
        row.chars().map(|c| match c {
            '#' => true,
            '.' => false,
            _ => panic!("unexpected picture char {c:?}"),
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shapes() {
        let p = picture(&["#.", ".#"]);
        assert_eq!(p.rows(), 2);
        assert_eq!(p.cols(), 2);
        assert!(p.get(0, 0));
        assert!(!p.get(0, 1));
    }

    #[test]
    #[should_panic(expected = "unexpected picture char")]
    fn rejects_unknown_chars() {
        let _ = picture(&["#x"]);
    }
}
