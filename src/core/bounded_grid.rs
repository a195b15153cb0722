use crate::core::Position;
use crate::core::bounds::BoundsOriginRoot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area() as usize];
        BoundedGrid { bounds, cells }
    }

    /// Builds a grid from rows of equal length. Rows shorter than the widest are padded with `fill`.
    pub fn from_rows(rows: Vec<Vec<T>>, fill: T) -> Self
    where
        T: Clone,
    {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, fill.clone());
            cells.extend(row);
        }
        BoundedGrid {
            bounds: BoundsOriginRoot::new(width as i32, height as i32),
            cells,
        }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.extent.x
    }

    pub fn height(&self) -> i32 {
        self.bounds.extent.z
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Position) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = Position> {
        let extent = self.bounds.extent;
        (0..extent.z).flat_map(move |z| (0..extent.x).map(move |x| Position { x, z }))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.bounds.extent.x.max(1) as usize)
    }

    fn index_of(&self, pos: &Position) -> usize {
        (pos.z * self.bounds.extent.x + pos.x) as usize
    }
}

impl<T> std::ops::Index<&Position> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Position) -> &Self::Output {
        &self.cells[self.index_of(index)]
    }
}

impl<T> std::ops::IndexMut<&Position> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Position) -> &mut Self::Output {
        let i = self.index_of(index);
        &mut self.cells[i]
    }
}
