//! Cache-oblivious, in-place transposition of square matrices.
//!
//! The matrix is split into quadrants until single cells remain. The two diagonal quadrants are
//! transposed in place, and the two off-diagonal quadrants are swapped with each other while
//! being transposed. No block size is tuned for any cache level: the recursion reaches blocks
//! that fit into every level on its own [1].
//!
//! Each cell holds `group` consecutive elements that move together and are never reordered,
//! which lets a buffer be viewed as a square matrix of pairs when its length is an odd power
//! of two.
//!
//! # References
//!
//! [1] M. Frigo, C. E. Leiserson, H. Prokop and S. Ramachandran, "Cache-oblivious algorithms,"
//! 40th Annual Symposium on Foundations of Computer Science, 1999, pp. 285-297,
//! doi: 10.1109/SFFCS.1999.814600.
use crate::error::FftError;

/// Row-major view of a `dim x dim` matrix whose cells are runs of `group` consecutive elements.
///
/// The view only carries index arithmetic, it never owns or relocates data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareLayout {
    dim: usize,
    group: usize,
}

impl SquareLayout {
    /// Describes a buffer of length `len` as a `rows x cols` matrix of `group`-element cells.
    ///
    /// Returns [`FftError::ShapeMismatch`] unless `rows == cols`, the dimension is zero or a
    /// power of two, `group` is non-zero, and the cells cover exactly `len` elements.
    pub fn new(rows: usize, cols: usize, group: usize, len: usize) -> Result<Self, FftError> {
        let covers_buffer = rows
            .checked_mul(cols)
            .and_then(|cells| cells.checked_mul(group))
            == Some(len);

        if rows == cols && (rows == 0 || rows.is_power_of_two()) && group > 0 && covers_buffer {
            Ok(Self { dim: rows, group })
        } else {
            Err(FftError::ShapeMismatch {
                rows,
                cols,
                group,
                len,
            })
        }
    }

    /// Number of rows, which is also the number of columns.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of elements per cell.
    pub fn group(&self) -> usize {
        self.group
    }

    /// Index of the first element of the cell at `(row, col)`.
    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.dim + col) * self.group
    }
}

/// A square block of cells, addressed by its top-left cell.
#[derive(Debug, Clone, Copy)]
struct Block {
    row: usize,
    col: usize,
    size: usize,
}

impl Block {
    /// Top-left, top-right, bottom-left and bottom-right quadrants, in that order.
    #[inline]
    fn quadrants(self) -> [Block; 4] {
        let half = self.size >> 1;
        let at = |row, col| Block {
            row,
            col,
            size: half,
        };
        [
            at(self.row, self.col),
            at(self.row, self.col + half),
            at(self.row + half, self.col),
            at(self.row + half, self.col + half),
        ]
    }
}

/// Transposes a `rows x cols` matrix of `group`-element cells stored row-major in `buf`.
///
/// Cells keep their internal order, only their positions change.
///
/// # Errors
///
/// Returns [`FftError::ShapeMismatch`] if the matrix is not square, its dimension is not a power
/// of two (zero is accepted), `group` is zero, or `buf.len() != rows * cols * group`. The buffer
/// is untouched in that case.
pub fn transpose_square<T>(
    buf: &mut [T],
    rows: usize,
    cols: usize,
    group: usize,
) -> Result<(), FftError> {
    let layout = SquareLayout::new(rows, cols, group, buf.len())?;
    transpose_block(
        buf,
        layout,
        Block {
            row: 0,
            col: 0,
            size: layout.dim(),
        },
    );
    Ok(())
}

/// Transposes a block that straddles the main diagonal.
fn transpose_block<T>(buf: &mut [T], layout: SquareLayout, block: Block) {
    if block.size <= 1 {
        return;
    }

    let [top_left, top_right, bottom_left, bottom_right] = block.quadrants();
    transpose_block(buf, layout, top_left);
    transpose_block(buf, layout, bottom_right);
    swap_transposed(buf, layout, top_right, bottom_left);
}

/// Swaps `a[i][j]` with `b[j][i]` for every cell of two equally sized, disjoint blocks.
fn swap_transposed<T>(buf: &mut [T], layout: SquareLayout, a: Block, b: Block) {
    if a.size == 1 {
        swap_cells(
            buf,
            layout.offset(a.row, a.col),
            layout.offset(b.row, b.col),
            layout.group(),
        );
        return;
    }

    let [a_tl, a_tr, a_bl, a_br] = a.quadrants();
    let [b_tl, b_tr, b_bl, b_br] = b.quadrants();
    swap_transposed(buf, layout, a_tl, b_tl);
    swap_transposed(buf, layout, a_tr, b_bl);
    swap_transposed(buf, layout, a_bl, b_tr);
    swap_transposed(buf, layout, a_br, b_br);
}

/// Exchanges the `group` elements starting at `a` with those starting at `b`.
#[inline]
fn swap_cells<T>(buf: &mut [T], a: usize, b: usize, group: usize) {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = buf.split_at_mut(hi);
    head[lo..lo + group].swap_with_slice(&mut tail[..group]);
}
