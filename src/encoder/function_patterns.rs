use crate::encoder::canvas::Canvas;
use crate::encoder::format;
use crate::models::Version;

/// Half-width of a finder pattern including its separator ring
const FINDER_REACH: isize = 4;
/// Half-width of an alignment pattern
const ALIGNMENT_REACH: isize = 2;

/// Stamp every function pattern for `version` and reserve the format areas.
///
/// Format bits are written later by [`format::FormatInfo::place`]; here the
/// cells are only marked so data placement skips them.
pub fn draw_function_patterns(canvas: &mut Canvas, version: Version) {
    for (row, col) in finder_centers(canvas.size()) {
        draw_finder(canvas, row, col);
    }
    draw_timing(canvas);
    draw_alignment(canvas, version);
    format::reserve(canvas);
}

/// Finder centres: top-left, top-right, bottom-left
pub fn finder_centers(size: usize) -> [(usize, usize); 3] {
    [(3, 3), (3, size - 4), (size - 4, 3)]
}

/// 7x7 finder plus light separator, clipped to the symbol.
/// Dark at Chebyshev distance 0, 1 and 3; light at 2 and 4.
fn draw_finder(canvas: &mut Canvas, center_row: usize, center_col: usize) {
    let size = canvas.size() as isize;
    for dy in -FINDER_REACH..=FINDER_REACH {
        for dx in -FINDER_REACH..=FINDER_REACH {
            let row = center_row as isize + dy;
            let col = center_col as isize + dx;
            if row < 0 || row >= size || col < 0 || col >= size {
                continue;
            }
            let dist = dx.abs().max(dy.abs());
            canvas.set_function(row as usize, col as usize, dist != 2 && dist != 4);
        }
    }
}

fn draw_timing(canvas: &mut Canvas) {
    let size = canvas.size();
    for i in 8..size - 8 {
        let dark = i % 2 == 0;
        if !canvas.is_function(6, i) {
            canvas.set_function(6, i, dark);
        }
        if !canvas.is_function(i, 6) {
            canvas.set_function(i, 6, dark);
        }
    }
}

fn draw_alignment(canvas: &mut Canvas, version: Version) {
    let size = canvas.size();
    let centers = version.info().alignment_centers;
    for &row in centers {
        for &col in centers {
            if overlaps_finder(size, row, col) {
                continue;
            }
            for dy in -ALIGNMENT_REACH..=ALIGNMENT_REACH {
                for dx in -ALIGNMENT_REACH..=ALIGNMENT_REACH {
                    let dist = dx.abs().max(dy.abs());
                    let r = (row as isize + dy) as usize;
                    let c = (col as isize + dx) as usize;
                    canvas.set_function(r, c, dist != 1);
                }
            }
        }
    }
}

/// True if the 5x5 footprint centred at (row, col) touches any finder's 9x9 box
fn overlaps_finder(size: usize, row: usize, col: usize) -> bool {
    let reach = (ALIGNMENT_REACH + FINDER_REACH) as usize;
    finder_centers(size)
        .iter()
        .any(|&(fr, fc)| row.abs_diff(fr) <= reach && col.abs_diff(fc) <= reach)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_for(number: u8) -> (Canvas, Version) {
        let version = Version::new(number).unwrap();
        let mut canvas = Canvas::new(version.module_count());
        draw_function_patterns(&mut canvas, version);
        (canvas, version)
    }

    #[test]
    fn test_finder_rings() {
        let (canvas, _) = canvas_for(2);
        for (cr, cc) in finder_centers(25) {
            for dy in -3isize..=3 {
                for dx in -3isize..=3 {
                    let r = (cr as isize + dy) as usize;
                    let c = (cc as isize + dx) as usize;
                    let dist = dx.abs().max(dy.abs());
                    assert_eq!(canvas.get(r, c), dist != 2, "finder at ({r}, {c})");
                    assert!(canvas.is_function(r, c));
                }
            }
        }
        // Separator next to the top-left finder
        assert!(!canvas.get(7, 7));
        assert!(canvas.is_function(7, 7));
    }

    #[test]
    fn test_timing_alternates() {
        let (canvas, _) = canvas_for(3);
        for i in 8..29 - 8 {
            assert_eq!(canvas.get(6, i), i % 2 == 0);
            assert_eq!(canvas.get(i, 6), i % 2 == 0);
            assert!(canvas.is_function(6, i));
        }
    }

    #[test]
    fn test_single_alignment_pattern() {
        let (canvas, version) = canvas_for(4);
        let c = version.module_count() - 7;
        assert!(canvas.get(c, c));
        assert!(!canvas.get(c - 1, c));
        assert!(!canvas.get(c + 1, c + 1));
        assert!(canvas.get(c - 2, c + 2));
        for r in c - 2..=c + 2 {
            for col in c - 2..=c + 2 {
                assert!(canvas.is_function(r, col));
            }
        }
        // Centres (6, c) and (c, 6) collide with finders and are skipped
        assert!(!canvas.is_function(8, c - 2));
        assert!(!canvas.is_function(c - 2, 8));
    }

    #[test]
    fn test_data_module_counts() {
        // Matches codewords * 8 plus 7 remainder bits per version
        for (number, codewords) in [(2, 44), (3, 70), (4, 100), (5, 134)] {
            let (canvas, _) = canvas_for(number);
            assert_eq!(canvas.data_module_count(), codewords * 8 + 7);
        }
    }
}
