//! Zig-zag placement of the codeword stream

use crate::encoder::canvas::Canvas;

/// Data module coordinates in placement order.
///
/// Column pairs are walked from the right edge leftward (column 6 is the
/// timing column and is skipped), alternating upward and downward, right
/// column before left at each row. Function modules are skipped.
pub fn placement_order(canvas: &Canvas) -> Vec<(usize, usize)> {
    let size = canvas.size();
    let mut order = Vec::with_capacity(canvas.data_module_count());
    let mut upward = true;
    let mut col = size as isize - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }

        for i in 0..size {
            let row = if upward { size - 1 - i } else { i };
            for c in [col as usize, col as usize - 1] {
                if !canvas.is_function(row, c) {
                    order.push((row, c));
                }
            }
        }

        upward = !upward;
        col -= 2;
    }

    order
}

/// Place `bits` into the data modules in zig-zag order.
///
/// Data modules left over once the stream is exhausted stay light.
/// Returns the number of bits written.
pub fn place_bits(canvas: &mut Canvas, bits: &[bool]) -> usize {
    let order = placement_order(canvas);
    let mut placed = 0;
    for (&(row, col), &bit) in order.iter().zip(bits) {
        canvas.set_data(row, col, bit);
        placed += 1;
    }
    placed
}
