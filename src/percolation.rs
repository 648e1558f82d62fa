/// Site percolation on an n-by-n grid
///
/// Sites start blocked and are opened one at a time; the grid reports
/// whether a connected path of open sites spans from the top row to the
/// bottom row. All connectivity bookkeeping is delegated to `DisjointSet`.
///
/// Each component root carries two flags, connects-top and connects-bottom,
/// merged by logical OR on every union. Tracking the two directions
/// separately avoids the backwash bug of the virtual-bottom-node design,
/// where every site of a spanning component reads as "full" once the system
/// percolates anywhere.
use anyhow::{bail, Result};

use crate::union_find::DisjointSet;

#[derive(Debug)]
pub struct Percolation {
    n: usize,
    sets: DisjointSet,
    is_open: Vec<bool>,
    connects_top: Vec<bool>,
    connects_bottom: Vec<bool>,
    open_count: usize,
    percolates: bool,
}

impl Percolation {
    /// Create an n-by-n grid with all sites initially blocked
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            bail!("grid size must be positive, got 0");
        }
        let sites = n * n;
        Ok(Percolation {
            n,
            sets: DisjointSet::new(sites),
            is_open: vec![false; sites],
            connects_top: vec![false; sites],
            connects_bottom: vec![false; sites],
            open_count: 0,
            percolates: false,
        })
    }

    /// Grid dimension n
    pub fn size(&self) -> usize {
        self.n
    }

    /// Map a 1-indexed (row, col) to the scalar site index
    fn to_scalar(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + (col - 1)
    }

    fn check_coord(&self, op: &str, field: &str, val: usize) -> Result<()> {
        if val < 1 || val > self.n {
            bail!("{op}: {field} must be in 1..={}, got {val}", self.n);
        }
        Ok(())
    }

    fn check_site(&self, op: &str, row: usize, col: usize) -> Result<usize> {
        self.check_coord(op, "row", row)?;
        self.check_coord(op, "col", col)?;
        Ok(self.to_scalar(row, col))
    }

    /// Open the site (row, col) if it is not open already
    ///
    /// Joins the site with each of its open orthogonal neighbors and latches
    /// the percolates flag if its component now touches both the top and the
    /// bottom row. Opening an already-open site is a no-op.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.check_site("open", row, col)?;
        if self.is_open[site] {
            return Ok(());
        }
        self.is_open[site] = true;
        self.open_count += 1;

        // A blocked site has never been unioned, so it is still its own root
        self.connects_top[site] = row == 1;
        self.connects_bottom[site] = row == self.n;

        let neighbors = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (nrow, ncol) in neighbors {
            if nrow < 1 || nrow > self.n || ncol < 1 || ncol > self.n {
                continue;
            }
            let other = self.to_scalar(nrow, ncol);
            if self.is_open[other] {
                self.link(site, other)?;
            }
        }

        let root = self.sets.find(site)?;
        if self.connects_top[root] && self.connects_bottom[root] {
            self.percolates = true;
        }
        Ok(())
    }

    /// Union two open sites and carry the component flags onto the surviving
    /// root. Only root entries of the flag arrays are ever read, so stale
    /// entries left at absorbed roots are harmless.
    fn link(&mut self, a: usize, b: usize) -> Result<()> {
        let root_a = self.sets.find(a)?;
        let root_b = self.sets.find(b)?;
        if root_a == root_b {
            return Ok(());
        }
        let top = self.connects_top[root_a] || self.connects_top[root_b];
        let bottom = self.connects_bottom[root_a] || self.connects_bottom[root_b];
        self.sets.union(root_a, root_b)?;
        let merged = self.sets.find(a)?;
        self.connects_top[merged] = top;
        self.connects_bottom[merged] = bottom;
        Ok(())
    }

    /// Is the site (row, col) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.check_site("is_open", row, col)?;
        Ok(self.is_open[site])
    }

    /// Is the site (row, col) full, i.e. connected to the top row through a
    /// path of open sites?
    ///
    /// Reads only the top-connectivity flag of the site's component. Bottom
    /// connectivity plays no part here; consulting it (or any bottom
    /// sentinel node) is exactly the backwash bug.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.check_site("is_full", row, col)?;
        if !self.is_open[site] {
            return Ok(false);
        }
        let root = self.sets.root(site)?;
        Ok(self.connects_top[root])
    }

    /// Number of open sites
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Does the system percolate?
    ///
    /// Latches true permanently the first time any component touches both
    /// the top and the bottom row.
    pub fn percolates(&self) -> bool {
        self.percolates
    }
}
