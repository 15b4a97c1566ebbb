//! Fixed rows x columns matrix of uniform cells.
use super::Arrangement;
use crate::LayoutError;
use crate::container::Child;
use charta_types::LengthConstraint::{Fixed, Range, Unconstrained};
use charta_types::{Interval, Rect, Size, SizeConstraint};

/// Tiles children into a `rows` x `columns` matrix of equal cells, child
/// `i` landing at column `i % columns`, row `i / columns`.
///
/// Cells beyond the child count stay empty; children beyond the cell count
/// are silently dropped from placement.
#[derive(Debug, Clone, Copy)]
pub struct GridArrangement {
    rows: usize,
    columns: usize,
}

impl GridArrangement {
    /// # Panics
    ///
    /// Panics if `rows` or `columns` is zero.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(
            rows > 0 && columns > 0,
            "grid dimensions must be positive, got {rows}x{columns}"
        );
        Self { rows, columns }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Measures every child naturally and scales the largest cell up to a
    /// full matrix.
    fn arrange_uu(&self, children: &mut [Child]) -> Result<Size, LayoutError> {
        let mut max_width = 0.0f32;
        let mut max_height = 0.0f32;
        for child in children.iter_mut() {
            let size = child.block.arrange(&SizeConstraint::UNCONSTRAINED)?;
            max_width = max_width.max(size.width);
            max_height = max_height.max(size.height);
        }
        self.arrange_ff(
            children,
            max_width * self.columns as f32,
            max_height * self.rows as f32,
        )
    }

    /// Discovers the needed height at a fixed width.
    fn arrange_fu(&self, children: &mut [Child], width: f32) -> Result<Size, LayoutError> {
        let probe = SizeConstraint::fixed_width(width / self.columns as f32);
        let mut max_height = 0.0f32;
        for child in children.iter_mut() {
            let size = child.block.arrange(&probe)?;
            max_height = max_height.max(size.height);
        }
        self.arrange_ff(children, width, max_height * self.rows as f32)
    }

    /// Discovers the needed width at a fixed height.
    fn arrange_uf(&self, children: &mut [Child], height: f32) -> Result<Size, LayoutError> {
        let probe = SizeConstraint::fixed_height(height / self.rows as f32);
        let mut max_width = 0.0f32;
        for child in children.iter_mut() {
            let size = child.block.arrange(&probe)?;
            max_width = max_width.max(size.width);
        }
        self.arrange_ff(children, max_width * self.columns as f32, height)
    }

    fn arrange_ff(&self, children: &mut [Child], width: f32, height: f32) -> Result<Size, LayoutError> {
        let cell_width = width / self.columns as f32;
        let cell_height = height / self.rows as f32;
        let cell = SizeConstraint::new(cell_width, cell_height);
        let cell_count = self.rows * self.columns;
        for (index, child) in children.iter_mut().enumerate() {
            if index >= cell_count {
                log::warn!(
                    "grid of {}x{} cells drops child {index} and beyond",
                    self.rows,
                    self.columns
                );
                break;
            }
            let row = index / self.columns;
            let column = index % self.columns;
            child.block.arrange(&cell)?;
            child.block.set_bounds(Rect::new(
                column as f32 * cell_width,
                row as f32 * cell_height,
                cell_width,
                cell_height,
            ));
        }
        Ok(Size::new(width, height))
    }

    fn arrange_ru(&self, children: &mut [Child], width_range: Interval) -> Result<Size, LayoutError> {
        let size = self.arrange_uu(children)?;
        if width_range.contains(size.width) {
            Ok(size)
        } else {
            self.arrange_fu(children, width_range.constrain(size.width))
        }
    }

    fn arrange_ur(&self, children: &mut [Child], height_range: Interval) -> Result<Size, LayoutError> {
        let size = self.arrange_uu(children)?;
        if height_range.contains(size.height) {
            Ok(size)
        } else {
            self.arrange_uf(children, height_range.constrain(size.height))
        }
    }

    fn arrange_fr(
        &self,
        children: &mut [Child],
        width: f32,
        height_range: Interval,
    ) -> Result<Size, LayoutError> {
        let size = self.arrange_fu(children, width)?;
        if height_range.contains(size.height) {
            Ok(size)
        } else {
            self.arrange_ff(children, width, height_range.constrain(size.height))
        }
    }

    fn arrange_rf(
        &self,
        children: &mut [Child],
        width_range: Interval,
        height: f32,
    ) -> Result<Size, LayoutError> {
        let size = self.arrange_uf(children, height)?;
        if width_range.contains(size.width) {
            Ok(size)
        } else {
            self.arrange_ff(children, width_range.constrain(size.width), height)
        }
    }

    fn arrange_rr(
        &self,
        children: &mut [Child],
        width_range: Interval,
        height_range: Interval,
    ) -> Result<Size, LayoutError> {
        let size = self.arrange_uu(children)?;
        match (
            width_range.contains(size.width),
            height_range.contains(size.height),
        ) {
            (true, true) => Ok(size),
            (false, true) => {
                self.arrange_fr(children, width_range.constrain(size.width), height_range)
            }
            (true, false) => {
                self.arrange_rf(children, width_range, height_range.constrain(size.height))
            }
            (false, false) => self.arrange_ff(
                children,
                width_range.constrain(size.width),
                height_range.constrain(size.height),
            ),
        }
    }
}

impl Arrangement for GridArrangement {
    fn arrange(
        &self,
        children: &mut [Child],
        constraint: &SizeConstraint,
    ) -> Result<Size, LayoutError> {
        log::trace!(
            "grid {}x{} arrange under {constraint:?}",
            self.rows,
            self.columns
        );
        match (constraint.width, constraint.height) {
            (Unconstrained, Unconstrained) => self.arrange_uu(children),
            (Fixed(width), Unconstrained) => self.arrange_fu(children, width),
            (Unconstrained, Fixed(height)) => self.arrange_uf(children, height),
            (Fixed(width), Fixed(height)) => self.arrange_ff(children, width, height),
            (Range(widths), Unconstrained) => self.arrange_ru(children, widths),
            (Unconstrained, Range(heights)) => self.arrange_ur(children, heights),
            (Fixed(width), Range(heights)) => self.arrange_fr(children, width, heights),
            (Range(widths), Fixed(height)) => self.arrange_rf(children, widths, height),
            (Range(widths), Range(heights)) => self.arrange_rr(children, widths, heights),
        }
    }
}
