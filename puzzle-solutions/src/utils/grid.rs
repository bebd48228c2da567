//! Dense rectangular grids addressed by [`Coord`]
//!
//! `(0, 0)` is the top-left cell; rows are stored one after another.

use super::coord::Coord;
use puzzle_solver::ParseError;
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Grid of the given size with every cell set to `fill`
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f` for every cell in row-major order
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Coord) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(Coord::new(x as i64, y as i64)));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a grid from equally long rows
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ParseError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(ParseError::MissingData("grid has no cells".to_string()));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(ParseError::InvalidFormat(format!(
                "grid row {} has {} cells, expected {}",
                y + 1,
                row.len(),
                width
            )));
        }
        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse one cell per character, one row per non-empty line
    pub fn parse_with(
        input: &str,
        mut f: impl FnMut(char) -> Result<T, ParseError>,
    ) -> Result<Self, ParseError> {
        let rows = input
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(&mut f).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.index_of(c).is_some()
    }

    fn index_of(&self, c: Coord) -> Option<usize> {
        let x = usize::try_from(c.x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(c.y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }

    fn coord_of(&self, index: usize) -> Coord {
        Coord::new((index % self.width) as i64, (index / self.width) as i64)
    }

    pub fn get(&self, c: Coord) -> Option<&T> {
        self.index_of(c).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, c: Coord) -> Option<&mut T> {
        self.index_of(c).map(|i| &mut self.cells[i])
    }

    /// Every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<T> {
        let width = self.width;
        (0..self.cells.len()).map(move |i| Coord::new((i % width) as i64, (i / width) as i64))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.coord_of(i), cell))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Rows top to bottom; a zero-width grid has none
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width.max(1))
    }

    /// First cell in row-major order matching `pred`
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Coord> {
        self.cells
            .iter()
            .position(|cell| pred(cell))
            .map(|i| self.coord_of(i))
    }

    pub fn count(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|cell| pred(cell)).count()
    }

    /// Orthogonal neighbours of `c` that lie inside the grid
    pub fn neighbors4(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.neighbors4().filter(|n| self.contains(*n))
    }

    /// All eight surrounding cells of `c` that lie inside the grid
    pub fn neighbors8(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.neighbors8().filter(|n| self.contains(*n))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(&mut f).collect(),
        }
    }
}

impl Grid<char> {
    pub fn parse_chars(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, Ok)
    }
}

impl<T: Clone> Grid<T> {
    fn at(&self, x: usize, y: usize) -> T {
        self.cells[y * self.width + x].clone()
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.height, self.width, |c| {
            self.at(c.y as usize, c.x as usize)
        })
    }

    /// Quarter turn clockwise: the left column becomes the top row
    pub fn rotate_cw(&self) -> Self {
        let h = self.height;
        Self::from_fn(self.height, self.width, |c| {
            self.at(c.y as usize, h - 1 - c.x as usize)
        })
    }

    /// Quarter turn counter-clockwise: the top row becomes the left column
    pub fn rotate_ccw(&self) -> Self {
        let w = self.width;
        Self::from_fn(self.height, self.width, |c| {
            self.at(w - 1 - c.y as usize, c.x as usize)
        })
    }

    /// Mirror left to right
    pub fn flip_horizontal(&self) -> Self {
        let w = self.width;
        Self::from_fn(self.width, self.height, |c| {
            self.at(w - 1 - c.x as usize, c.y as usize)
        })
    }

    /// Mirror top to bottom
    pub fn flip_vertical(&self) -> Self {
        let h = self.height;
        Self::from_fn(self.width, self.height, |c| {
            self.at(c.x as usize, h - 1 - c.y as usize)
        })
    }

    /// The eight rotations and reflections of this grid
    ///
    /// Symmetric grids produce duplicates.
    pub fn variants(&self) -> Vec<Self> {
        let mut out = Vec::with_capacity(8);
        let mut current = self.clone();
        for _ in 0..4 {
            out.push(current.flip_horizontal());
            let next = current.rotate_cw();
            out.push(current);
            current = next;
        }
        out
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, c: Coord) -> &T {
        match self.index_of(c) {
            Some(i) => &self.cells[i],
            None => panic!("{} is outside the {}x{} grid", c, self.width, self.height),
        }
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, c: Coord) -> &mut T {
        match self.index_of(c) {
            Some(i) => &mut self.cells[i],
            None => panic!("{} is outside the {}x{} grid", c, self.width, self.height),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<char> {
        Grid::parse_chars("abc\ndef\n").unwrap()
    }

    #[test]
    fn test_parse_and_index() {
        let g = sample();
        assert_eq!((g.width(), g.height()), (3, 2));
        assert_eq!(g[Coord::new(0, 0)], 'a');
        assert_eq!(g[Coord::new(2, 1)], 'f');
        assert_eq!(g.get(Coord::new(3, 0)), None);
        assert_eq!(g.get(Coord::new(-1, 0)), None);
        assert_eq!(g.find(|&c| c == 'e'), Some(Coord::new(1, 1)));
        assert_eq!(g.to_string(), "abc\ndef\n");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(matches!(
            Grid::parse_chars(""),
            Err(ParseError::MissingData(_))
        ));
        assert!(matches!(
            Grid::parse_chars("abc\nde"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(Grid::parse_with("12\n3x", |c| c
            .to_digit(10)
            .ok_or_else(|| ParseError::InvalidFormat(c.to_string())))
        .is_err());
    }

    #[test]
    fn test_rotations() {
        let g = sample();
        assert_eq!(g.rotate_cw().to_string(), "da\neb\nfc\n");
        assert_eq!(g.rotate_ccw().to_string(), "cf\nbe\nad\n");
        assert_eq!(g.transpose().to_string(), "ad\nbe\ncf\n");
        assert_eq!(g.flip_horizontal().to_string(), "cba\nfed\n");
        assert_eq!(g.flip_vertical().to_string(), "def\nabc\n");
        assert_eq!(g.rotate_cw().rotate_ccw(), g);
        assert_eq!(g.rotate_cw().rotate_cw(), g.flip_horizontal().flip_vertical());
    }

    #[test]
    fn test_variants_are_distinct_for_asymmetric_grid() {
        let g = sample();
        let variants = g.variants();
        assert_eq!(variants.len(), 8);
        for (i, a) in variants.iter().enumerate() {
            for b in &variants[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(variants.contains(&g.transpose()));
    }

    #[test]
    fn test_bounded_neighbors() {
        let g = Grid::new(3, 3, 0u8);
        assert_eq!(g.neighbors4(Coord::new(0, 0)).count(), 2);
        assert_eq!(g.neighbors8(Coord::new(0, 0)).count(), 3);
        assert_eq!(g.neighbors8(Coord::new(1, 1)).count(), 8);
        assert_eq!(g.coords().count(), 9);
    }

    #[test]
    fn test_zero_sized_grids() {
        let empty = Grid::new(0, 0, '.');
        assert_eq!(empty.rows().count(), 0);
        assert_eq!(empty.to_string(), "");

        let no_columns = Grid::new(0, 3, 0u8);
        assert_eq!(no_columns.rows().count(), 0);
        assert_eq!(no_columns.coords().count(), 0);
        assert_eq!(Grid::from_fn(0, 2, |_| 'x').to_string(), "");
        assert_eq!(Grid::new(2, 0, 'x').rows().count(), 0);
    }

    #[test]
    fn test_map_and_count() {
        let g = Grid::parse_chars("#.#\n.#.").unwrap();
        let lit = g.map(|&c| c == '#');
        assert_eq!(lit.count(|&b| b), 3);
        assert_eq!(lit.rows().next(), Some(&[true, false, true][..]));
    }
}
