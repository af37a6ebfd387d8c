//! A dense multidimensional array

use core::{
    fmt,
    ops::{Index, IndexMut},
};

fn total_of(shape: &[usize]) -> Option<usize> {
    let mut total = 1usize;
    for &dim in shape {
        total = total.checked_mul(dim)?;
    }
    Some(total)
}

/// A dense array of any rank in one row-major allocation.
///
/// The shape is fixed at construction. Elements are reachable both by
/// coordinate (`&[usize]` of length [Grid::rank]) and by flat row-major
/// index, and the cursors of [Seq](crate::Seq) traverse the flat order, so
/// rank does not matter to generic traversal code.
///
/// A rank 0 grid holds exactly one element, and any dimension of 0 makes the
/// grid empty.
///
/// ```
/// use quad_seq::Grid;
///
/// let mut g = Grid::from_fn(&[2, 3], |i| i as u64);
/// assert_eq!(g.get(&[1, 0]), Some(&3));
/// g[&[1, 0]] = 30;
/// assert_eq!(g.flat(), &[0, 1, 2, 30, 4, 5]);
/// ```
pub struct Grid<T> {
    pub(crate) data: Vec<T>,
    pub(crate) shape: Box<[usize]>,
}

impl<T> Grid<T> {
    /// Creates a grid of shape `shape` with every element a clone of `fill`.
    ///
    /// # Panics
    ///
    /// Panics if the product of `shape` overflows `usize`.
    pub fn new(shape: &[usize], fill: T) -> Self
    where
        T: Clone,
    {
        let total = total_of(shape).expect("`Grid` shape overflows `usize`");
        Self {
            data: vec![fill; total],
            shape: shape.into(),
        }
    }

    /// Creates a grid of shape `shape` with element values taken from `f`
    /// applied to each flat row-major index in order.
    ///
    /// # Panics
    ///
    /// Panics if the product of `shape` overflows `usize`.
    pub fn from_fn<F: FnMut(usize) -> T>(shape: &[usize], f: F) -> Self {
        let total = total_of(shape).expect("`Grid` shape overflows `usize`");
        Self {
            data: (0..total).map(f).collect(),
            shape: shape.into(),
        }
    }

    /// Creates a grid of shape `shape` over the elements of `data` in flat
    /// row-major order. Returns `data` back if its length does not equal the
    /// product of `shape`, including when that product overflows `usize` (no
    /// length can match it).
    pub fn from_vec(shape: &[usize], data: Vec<T>) -> Result<Self, Vec<T>> {
        if total_of(shape) != Some(data.len()) {
            return Err(data)
        }
        Ok(Self {
            data,
            shape: shape.into(),
        })
    }

    /// Returns the dimensions of the grid
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of dimensions
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements across all dimensions
    pub fn total_len(&self) -> usize {
        self.data.len()
    }

    /// Returns if the grid has no elements, which needs some dimension to
    /// be 0
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns all elements as one slice in flat row-major order
    pub fn flat(&self) -> &[T] {
        &self.data
    }

    /// Returns all elements as one mutable slice in flat row-major order
    pub fn flat_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns the flat row-major index of coordinate `index`, or `None` if
    /// `index` has the wrong length or is out of bounds in some dimension
    pub fn index_of(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None
        }
        let mut flat = 0;
        for (&x, &dim) in index.iter().zip(self.shape.iter()) {
            if x >= dim {
                return None
            }
            flat = (flat * dim) + x;
        }
        Some(flat)
    }

    /// Returns the coordinate of flat row-major index `flat`, or `None` if
    /// `flat >= self.total_len()`
    pub fn coords_of(&self, flat: usize) -> Option<Vec<usize>> {
        if flat >= self.data.len() {
            return None
        }
        let mut res = vec![0; self.shape.len()];
        let mut rem = flat;
        for (slot, &dim) in res.iter_mut().zip(self.shape.iter()).rev() {
            *slot = rem % dim;
            rem /= dim;
        }
        Some(res)
    }

    /// Returns a reference to the element at coordinate `index`, or `None`
    /// if it is out of bounds
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.index_of(index).map(|i| &self.data[i])
    }

    /// Returns a mutable reference to the element at coordinate `index`, or
    /// `None` if it is out of bounds
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        let i = self.index_of(index)?;
        Some(&mut self.data[i])
    }

    /// Returns a reference to the element at flat row-major index `flat`,
    /// or `None` if it is out of bounds
    pub fn get_flat(&self, flat: usize) -> Option<&T> {
        self.data.get(flat)
    }

    /// Returns a mutable reference to the element at flat row-major index
    /// `flat`, or `None` if it is out of bounds
    pub fn get_flat_mut(&mut self, flat: usize) -> Option<&mut T> {
        self.data.get_mut(flat)
    }

    /// Used by tests and doctests
    #[doc(hidden)]
    pub fn _check_invariants(this: &Self) -> Result<(), &'static str> {
        match total_of(&this.shape) {
            Some(total) if total == this.data.len() => Ok(()),
            Some(_) => Err("shape and storage length mismatch"),
            None => Err("shape product overflows"),
        }
    }
}

impl<T> Index<&[usize]> for Grid<T> {
    type Output = T;

    fn index(&self, index: &[usize]) -> &T {
        self.get(index)
            .expect("indexed `Grid` with an out-of-bounds coordinate")
    }
}

impl<T> IndexMut<&[usize]> for Grid<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut T {
        self.get_mut(index)
            .expect("indexed `Grid` with an out-of-bounds coordinate")
    }
}

impl<T: Clone> Clone for Grid<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            shape: self.shape.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Grid")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.shape == other.shape) && (self.data == other.data)
    }
}

impl<T: Eq> Eq for Grid<T> {}
