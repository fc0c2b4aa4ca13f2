use crate::error::MatrixError;
use crate::matrix::element::Scalar;
use log::trace;
use num_traits::{One, Zero};
use std::array;
use std::fmt;
use std::io;
use std::ops;

/// Matrix with dimensions fixed at compile time.
///
/// Cells are stored row-major in a nested array, so the flat index of
/// `(row, col)` is `row * C + col` and the whole matrix can be viewed as one
/// contiguous slice through [`FixedMatrix::as_slice`].
#[derive(Debug, Clone, Copy)]
pub struct FixedMatrix<T, const R: usize, const C: usize> {
    cells: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    pub const ROWS: usize = R;
    pub const COLUMNS: usize = C;
    pub const SIZE: usize = R * C;

    pub const fn new(cells: [[T; C]; R]) -> Self {
        FixedMatrix { cells }
    }

    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        FixedMatrix {
            cells: array::from_fn(|row| array::from_fn(|col| f(row, col))),
        }
    }

    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_, _| value.clone())
    }

    /// Copies the top-left `R x C` block of a nested source.
    ///
    /// The source must provide at least `R` rows of at least `C` values each,
    /// otherwise this panics. Extra rows and columns are ignored. Use
    /// [`FixedMatrix::from_list`] to reject sources that do not match exactly.
    pub fn from_source<S: AsRef<[T]>>(source: &[S]) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|row, col| source[row].as_ref()[col].clone())
    }

    /// Builds a matrix from exactly `R` lines of exactly `C` values.
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        Self::cells_from_list(lines)
            .map(|cells| FixedMatrix { cells })
            .inspect_err(|error| trace!("rejected matrix source: {error}"))
    }

    fn cells_from_list(lines: Vec<Vec<T>>) -> Result<[[T; C]; R], MatrixError> {
        let found_rows = lines.len();
        let mismatch = |found_cols| MatrixError::ShapeMismatch {
            expected: (R, C),
            found: (found_rows, found_cols),
        };

        let rows = lines
            .into_iter()
            .map(|line| {
                let len = line.len();
                <[T; C]>::try_from(line).map_err(|_| mismatch(len))
            })
            .collect::<Result<Vec<_>, _>>()?;
        <[[T; C]; R]>::try_from(rows).map_err(|_| mismatch(C))
    }

    pub fn to_list(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }

    // CAPACITY

    pub const fn rows(&self) -> usize {
        R
    }

    pub const fn columns(&self) -> usize {
        C
    }

    pub const fn size(&self) -> usize {
        R * C
    }

    /// Same as `size()`, the matrix never grows.
    pub const fn max_size(&self) -> usize {
        R * C
    }

    pub const fn is_empty(&self) -> bool {
        R * C == 0
    }

    // ELEMENT ACCESS

    fn check_bounds(row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= R || col >= C {
            trace!("index ({}, {}) rejected for a {}x{} matrix", row, col, R, C);
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: R,
                columns: C,
            });
        }
        Ok(())
    }

    pub fn at(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        Self::check_bounds(row, col)?;
        Ok(&self.cells[row][col])
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        Self::check_bounds(row, col)?;
        Ok(&mut self.cells[row][col])
    }

    /// # Safety
    ///
    /// `row < R` and `col < C` must hold.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        unsafe { self.cells.get_unchecked(row).get_unchecked(col) }
    }

    /// # Safety
    ///
    /// `row < R` and `col < C` must hold.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        unsafe { self.cells.get_unchecked_mut(row).get_unchecked_mut(col) }
    }

    pub fn row(&self, row: usize) -> &[T; C] {
        &self.cells[row]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T; C] {
        &mut self.cells[row]
    }

    pub fn first(&self) -> &T {
        match self.as_slice().first() {
            Some(cell) => cell,
            None => panic!("first() called on an empty matrix"),
        }
    }

    pub fn first_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(cell) => cell,
            None => panic!("first_mut() called on an empty matrix"),
        }
    }

    pub fn last(&self) -> &T {
        match self.as_slice().last() {
            Some(cell) => cell,
            None => panic!("last() called on an empty matrix"),
        }
    }

    pub fn last_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(cell) => cell,
            None => panic!("last_mut() called on an empty matrix"),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        self.cells.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.cells.as_flattened_mut()
    }

    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.cells
    }

    pub fn into_rows(self) -> [[T; C]; R] {
        self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    // OPERATIONS

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.cells, &mut other.cells);
    }

    /// Copy of the matrix without row `row` and column `col`.
    ///
    /// `SR` and `SC` must be `R - 1` and `C - 1`, this is checked at compile
    /// time. Fails if `row` or `col` does not exist.
    pub fn submatrix<const SR: usize, const SC: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Result<FixedMatrix<T, SR, SC>, MatrixError>
    where
        T: Clone,
    {
        const {
            assert!(
                SR + 1 == R && SC + 1 == C,
                "a submatrix drops exactly one row and one column"
            )
        };
        Self::check_bounds(row, col)?;

        Ok(FixedMatrix::from_fn(|i, j| {
            let row_skip = usize::from(i >= row);
            let col_skip = usize::from(j >= col);
            self.cells[i + row_skip][j + col_skip].clone()
        }))
    }

    pub fn transpose(&self) -> FixedMatrix<T, C, R>
    where
        T: Clone,
    {
        FixedMatrix::from_fn(|row, col| self.cells[col][row].clone())
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> FixedMatrix<U, R, C> {
        FixedMatrix {
            cells: self.cells.map(|row| row.map(&mut f)),
        }
    }

    // FORMATTING

    /// Row-major text, every cell followed by `delimiter` and every row by a
    /// newline.
    pub fn display_with(&self, delimiter: char) -> impl fmt::Display + '_
    where
        T: fmt::Display,
    {
        Delimited {
            matrix: self,
            delimiter,
        }
    }

    pub fn write_to<W: io::Write>(&self, out: &mut W, delimiter: char) -> io::Result<()>
    where
        T: fmt::Display,
    {
        write!(out, "{}", self.display_with(delimiter))
    }
}

impl<T: Scalar, const R: usize, const C: usize> FixedMatrix<T, R, C> {
    pub fn trace(&self) -> Result<T, MatrixError> {
        if R != C {
            trace!("trace() rejected for a {}x{} matrix", R, C);
            return Err(MatrixError::NonSquare {
                rows: R,
                columns: C,
            });
        }

        Ok((0..R).fold(T::zero(), |acc, i| acc + self.cells[i][i].clone()))
    }
}

impl<T: Zero + One, const N: usize> FixedMatrix<T, N, N> {
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }
}

pub fn make_identity<T: Zero + One, const N: usize>() -> FixedMatrix<T, N, N> {
    FixedMatrix::identity()
}

pub fn from_source<T: Clone, const R: usize, const C: usize, S: AsRef<[T]>>(
    source: &[S],
) -> FixedMatrix<T, R, C> {
    FixedMatrix::from_source(source)
}

struct Delimited<'a, T, const R: usize, const C: usize> {
    matrix: &'a FixedMatrix<T, R, C>,
    delimiter: char,
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Delimited<'_, T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Nothing ends a row when there are no columns
        if C == 0 {
            return Ok(());
        }
        for row in &self.matrix.cells {
            for cell in row {
                write!(f, "{}{}", cell, self.delimiter)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for FixedMatrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(' '), f)
    }
}

impl<T: Default, const R: usize, const C: usize> Default for FixedMatrix<T, R, C> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for FixedMatrix<T, R, C> {
    fn from(cells: [[T; C]; R]) -> Self {
        FixedMatrix { cells }
    }
}

impl<T, const R: usize, const C: usize> AsRef<[T]> for FixedMatrix<T, R, C> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const R: usize, const C: usize> ops::Index<(usize, usize)> for FixedMatrix<T, R, C> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row][col]
    }
}

impl<T, const R: usize, const C: usize> ops::IndexMut<(usize, usize)> for FixedMatrix<T, R, C> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row][col]
    }
}

// `matrix[row][col]`
impl<T, const R: usize, const C: usize> ops::Index<usize> for FixedMatrix<T, R, C> {
    type Output = [T; C];

    #[inline(always)]
    fn index(&self, row: usize) -> &[T; C] {
        &self.cells[row]
    }
}

impl<T, const R: usize, const C: usize> ops::IndexMut<usize> for FixedMatrix<T, R, C> {
    #[inline(always)]
    fn index_mut(&mut self, row: usize) -> &mut [T; C] {
        &mut self.cells[row]
    }
}

impl<T, const R: usize, const C: usize> IntoIterator for FixedMatrix<T, R, C> {
    type Item = T;
    type IntoIter = std::iter::Flatten<array::IntoIter<[T; C], R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter().flatten()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a FixedMatrix<T, R, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a mut FixedMatrix<T, R, C> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Matrices of different shapes are never equal.
///
/// Because the right-hand side may have any shape, its dimensions cannot be
/// inferred from the left-hand side: compare against
/// `FixedMatrix::<T, R, C>::default()` or `FixedMatrix::<T, N, N>::identity()`
/// rather than a bare `FixedMatrix::default()`.
impl<T: PartialEq, const R: usize, const C: usize, const R2: usize, const C2: usize>
    PartialEq<FixedMatrix<T, R2, C2>> for FixedMatrix<T, R, C>
{
    fn eq(&self, other: &FixedMatrix<T, R2, C2>) -> bool {
        R == R2 && C == C2 && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for FixedMatrix<T, R, C> {}

macro_rules! impl_elementwise_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<T, const R: usize, const C: usize> ops::$op_assign<&FixedMatrix<T, R, C>>
            for FixedMatrix<T, R, C>
        where
            T: for<'a> ops::$op_assign<&'a T>,
        {
            fn $method_assign(&mut self, rhs: &FixedMatrix<T, R, C>) {
                self.iter_mut()
                    .zip(rhs.iter())
                    .for_each(|(a, b)| ops::$op_assign::$method_assign(a, b));
            }
        }

        impl<T, const R: usize, const C: usize> ops::$op_assign for FixedMatrix<T, R, C>
        where
            T: for<'a> ops::$op_assign<&'a T>,
        {
            fn $method_assign(&mut self, rhs: FixedMatrix<T, R, C>) {
                ops::$op_assign::$method_assign(self, &rhs);
            }
        }

        impl<T, const R: usize, const C: usize> ops::$op<&FixedMatrix<T, R, C>>
            for FixedMatrix<T, R, C>
        where
            T: for<'a> ops::$op_assign<&'a T>,
        {
            type Output = FixedMatrix<T, R, C>;

            fn $method(mut self, rhs: &FixedMatrix<T, R, C>) -> FixedMatrix<T, R, C> {
                ops::$op_assign::$method_assign(&mut self, rhs);
                self
            }
        }

        impl<T, const R: usize, const C: usize> ops::$op for FixedMatrix<T, R, C>
        where
            T: for<'a> ops::$op_assign<&'a T>,
        {
            type Output = FixedMatrix<T, R, C>;

            fn $method(self, rhs: FixedMatrix<T, R, C>) -> FixedMatrix<T, R, C> {
                ops::$op::$method(self, &rhs)
            }
        }

        impl<T, const R: usize, const C: usize> ops::$op<&FixedMatrix<T, R, C>>
            for &FixedMatrix<T, R, C>
        where
            T: Clone + for<'a> ops::$op_assign<&'a T>,
        {
            type Output = FixedMatrix<T, R, C>;

            fn $method(self, rhs: &FixedMatrix<T, R, C>) -> FixedMatrix<T, R, C> {
                ops::$op::$method(self.clone(), rhs)
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign);

// Applies a scalar to every cell
macro_rules! impl_scalar_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<T, const R: usize, const C: usize> ops::$op_assign<&T> for FixedMatrix<T, R, C>
        where
            T: for<'a> ops::$op_assign<&'a T>,
        {
            fn $method_assign(&mut self, rhs: &T) {
                self.iter_mut()
                    .for_each(|a| ops::$op_assign::$method_assign(a, rhs));
            }
        }

        impl<T, const R: usize, const C: usize> ops::$op_assign<T> for FixedMatrix<T, R, C>
        where
            T: for<'a> ops::$op_assign<&'a T>,
        {
            fn $method_assign(&mut self, rhs: T) {
                ops::$op_assign::$method_assign(self, &rhs);
            }
        }

        impl<T, const R: usize, const C: usize> ops::$op<T> for FixedMatrix<T, R, C>
        where
            T: for<'a> ops::$op_assign<&'a T>,
        {
            type Output = FixedMatrix<T, R, C>;

            fn $method(mut self, rhs: T) -> FixedMatrix<T, R, C> {
                ops::$op_assign::$method_assign(&mut self, &rhs);
                self
            }
        }

        impl<T, const R: usize, const C: usize> ops::$op<T> for &FixedMatrix<T, R, C>
        where
            T: Clone + for<'a> ops::$op_assign<&'a T>,
        {
            type Output = FixedMatrix<T, R, C>;

            fn $method(self, rhs: T) -> FixedMatrix<T, R, C> {
                ops::$op::$method(self.clone(), rhs)
            }
        }
    };
}

impl_scalar_op!(Mul, mul, MulAssign, mul_assign);

impl<T: Scalar, const R: usize, const C: usize, const K: usize> ops::Mul<&FixedMatrix<T, C, K>>
    for &FixedMatrix<T, R, C>
{
    type Output = FixedMatrix<T, R, K>;

    fn mul(self, rhs: &FixedMatrix<T, C, K>) -> FixedMatrix<T, R, K> {
        FixedMatrix::from_fn(|i, j| {
            (0..C).fold(T::zero(), |acc, k| {
                acc + self.cells[i][k].clone() * rhs.cells[k][j].clone()
            })
        })
    }
}

impl<T: Scalar, const R: usize, const C: usize, const K: usize> ops::Mul<FixedMatrix<T, C, K>>
    for FixedMatrix<T, R, C>
{
    type Output = FixedMatrix<T, R, K>;

    fn mul(self, rhs: FixedMatrix<T, C, K>) -> FixedMatrix<T, R, K> {
        &self * &rhs
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
