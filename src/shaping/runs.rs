//! Run segmentation: grid cells to shapeable text runs.

use crate::cell::CellFlags;
use crate::grid::Row;
use crate::index::Column;

use super::ShapingRun;

/// Segment a row of cells into shaping runs.
///
/// Spaces and nulls are run boundaries; wide-char spacers are skipped
/// without breaking the run. Combining marks are appended to the run's
/// text mapped to the same column as their base character.
pub fn segment_runs(row: &Row, cols: usize) -> Vec<ShapingRun> {
    let cols = cols.min(row.cols());
    let mut runs: Vec<ShapingRun> = Vec::new();
    let mut open = false;
    let mut col = 0;

    while col < cols {
        let cell = &row[Column(col)];

        if cell.flags.contains(CellFlags::WIDE_CHAR_SPACER)
            || cell.flags.contains(CellFlags::LEADING_WIDE_CHAR_SPACER)
        {
            col += 1;
            continue;
        }

        if cell.ch == ' ' || cell.ch == '\0' {
            open = false;
            col += 1;
            continue;
        }

        if !open {
            runs.push(ShapingRun {
                text: String::new(),
                col_start: col,
                byte_to_col: Vec::new(),
            });
            open = true;
        }
        let run = runs.last_mut().expect("opened above");

        run.text.push(cell.ch);
        for _ in 0..cell.ch.len_utf8() {
            run.byte_to_col.push(col);
        }
        for &zw in cell.zerowidth() {
            run.text.push(zw);
            for _ in 0..zw.len_utf8() {
                run.byte_to_col.push(col);
            }
        }

        col += if cell.flags.contains(CellFlags::WIDE_CHAR) {
            2
        } else {
            1
        };
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::segment_runs;
    use crate::grid::Grid;

    fn runs_for(text: &str, cols: usize) -> Vec<super::ShapingRun> {
        let mut grid = Grid::new(1, cols);
        grid.write_text(0, 0, text);
        segment_runs(grid.row(0), cols)
    }

    #[test]
    fn single_word_is_one_run() {
        let runs = runs_for("hello", 20);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "hello");
        assert_eq!(runs[0].col_start, 0);
        assert_eq!(runs[0].byte_to_col, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn spaces_split_runs() {
        let runs = runs_for("ab  cd", 20);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "ab");
        assert_eq!(runs[1].text, "cd");
        assert_eq!(runs[1].col_start, 4);
    }

    #[test]
    fn blank_row_has_no_runs() {
        assert!(runs_for("", 20).is_empty());
    }

    #[test]
    fn wide_char_advances_two_columns() {
        let runs = runs_for("漢x", 20);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "漢x");
        // 3 UTF-8 bytes of the wide char map to column 0, then 'x' at 2.
        assert_eq!(runs[0].byte_to_col, vec![0, 0, 0, 2]);
    }

    #[test]
    fn combining_marks_fold_into_base_column() {
        let runs = runs_for("e\u{0301}f", 20);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "e\u{0301}f");
        // 'e' at col 0, two mark bytes also col 0, 'f' at col 1.
        assert_eq!(runs[0].byte_to_col, vec![0, 0, 0, 1]);
    }

    #[test]
    fn cols_clamped_to_row_width() {
        let runs = runs_for("abc", 20);
        let mut grid = Grid::new(1, 3);
        grid.write_text(0, 0, "abc");
        assert_eq!(segment_runs(grid.row(0), 100)[0].text, runs[0].text);
    }
}
