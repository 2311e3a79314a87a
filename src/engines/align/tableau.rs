//! Score and back-pointer tableaus
//!
//! Grids are `(m+1) x (n+1)` and stored flat, one layer per grid, with
//! one-byte back-pointer tags. Layers live and die within a single
//! alignment call. Out-of-bounds indexing is a bug in the recurrence
//! engine, checked in debug builds.

use crate::engines::{EngineError, EngineResult};

/// Back-pointer tags of the single-layer linear-gap mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum Direction {
    /// Consume a symbol of the second sequence against a gap
    Left,
    /// Consume one symbol of each sequence
    Diagonal,
    /// Consume a symbol of the first sequence against a gap
    Right,
}

/// Layer tags of the multi-layer affine modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum Layer {
    /// Alignment ends with a symbol of the first sequence over a gap
    Low,
    /// Alignment ends with two aligned symbols
    Mid,
    /// Alignment ends with a symbol of the second sequence over a gap
    Upp,
    /// Alignment is inside a free skip over the second sequence
    Jump,
    /// Virtual origin of local alignment
    Home,
}

/// A dense row-major grid of one tableau layer
pub(crate) struct Grid<T> {
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Allocate a `rows x cols` grid filled with `fill`. Allocation failure
    /// is reported instead of aborting.
    pub(crate) fn new(rows: usize, cols: usize, fill: T) -> EngineResult<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or_else(|| EngineError::Memory(format!("grid {}x{} overflows", rows, cols)))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| {
            EngineError::Memory(format!("failed to allocate {}x{} tableau layer", rows, cols))
        })?;
        data.resize(len, fill);
        Ok(Self { cols, data })
    }

    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(j < self.cols, "column {} out of bounds", j);
        self.data[i * self.cols + j]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: T) {
        debug_assert!(j < self.cols, "column {} out of bounds", j);
        self.data[i * self.cols + j] = value;
    }
}

/// Single-layer tableau of the global linear-gap mode
pub(crate) struct LinearTableau {
    pub score: Grid<f64>,
    pub pointer: Grid<Direction>,
}

impl LinearTableau {
    pub(crate) fn new(rows: usize, cols: usize) -> EngineResult<Self> {
        Ok(Self {
            score: Grid::new(rows, cols, 0.0)?,
            pointer: Grid::new(rows, cols, Direction::Diagonal)?,
        })
    }
}

/// Multi-layer tableau of the affine modes. The jump layer is only
/// materialised when jumps are enabled.
pub(crate) struct AffineTableau {
    pub mid: Grid<f64>,
    pub low: Grid<f64>,
    pub upp: Grid<f64>,
    pub jump: Option<Grid<f64>>,
    pub ptr_mid: Grid<Layer>,
    pub ptr_low: Grid<Layer>,
    pub ptr_upp: Grid<Layer>,
    pub ptr_jump: Option<Grid<Layer>>,
}

impl AffineTableau {
    /// Allocate all layers with score cells set to `fill`. Back-pointer
    /// cells default to their own layer tag; the recurrence overwrites
    /// every cell it can later read.
    pub(crate) fn new(rows: usize, cols: usize, fill: f64, with_jump: bool) -> EngineResult<Self> {
        let (jump, ptr_jump) = if with_jump {
            (
                Some(Grid::new(rows, cols, fill)?),
                Some(Grid::new(rows, cols, Layer::Jump)?),
            )
        } else {
            (None, None)
        };
        Ok(Self {
            mid: Grid::new(rows, cols, fill)?,
            low: Grid::new(rows, cols, fill)?,
            upp: Grid::new(rows, cols, fill)?,
            jump,
            ptr_mid: Grid::new(rows, cols, Layer::Mid)?,
            ptr_low: Grid::new(rows, cols, Layer::Low)?,
            ptr_upp: Grid::new(rows, cols, Layer::Upp)?,
            ptr_jump,
        })
    }
}
