/// Union-Find (Disjoint Sets) data structure with union by size and path
/// compression, over a fixed universe of elements `0..count`.
///
/// Indices outside the universe are contract violations and surface as
/// errors; they are never clamped or silently ignored.
use anyhow::{bail, Result};

#[derive(Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Create a new DisjointSet with `count` singleton components
    pub fn new(count: usize) -> Self {
        let parent = (0..count).collect();
        let size = vec![1; count];
        DisjointSet { parent, size }
    }

    /// Number of elements in the universe
    pub fn count(&self) -> usize {
        self.parent.len()
    }

    fn check(&self, x: usize) -> Result<()> {
        if x >= self.parent.len() {
            bail!(
                "element index {} out of range for universe of {} elements",
                x,
                self.parent.len()
            );
        }
        Ok(())
    }

    /// Find the root of element x with path compression
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.compress(x))
    }

    fn compress(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.compress(self.parent[x]);
        }
        self.parent[x]
    }

    /// Find the root of element x without mutating the forest
    ///
    /// Skips path compression so read-only queries can take `&self`. Trees
    /// stay logarithmic under union by size, so the walk is short even if
    /// no compressing `find` ever runs.
    pub fn root(&self, x: usize) -> Result<usize> {
        self.check(x)?;
        let mut x = x;
        while self.parent[x] != x {
            x = self.parent[x];
        }
        Ok(x)
    }

    /// Union the components containing x and y
    ///
    /// The smaller component's root is attached under the larger one and
    /// the surviving root's size updated. No-op when x and y already share
    /// a root.
    pub fn union(&mut self, x: usize, y: usize) -> Result<()> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(());
        }
        let (small, large) = if self.size[root_x] < self.size[root_y] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        Ok(())
    }

    /// Check if two elements are in the same component
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Size of the component containing x
    pub fn component_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }
}
