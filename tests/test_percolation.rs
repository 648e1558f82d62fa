/// Behavioral tests for the percolation grid: opening, fullness, and the
/// permanent percolates latch.
use percolate::percolation::Percolation;
use pretty_assertions::assert_eq;

#[test]
fn test_fresh_grid_has_no_open_sites() {
    for n in [1, 2, 5, 20] {
        let grid = Percolation::new(n).unwrap();
        assert_eq!(grid.number_of_open_sites(), 0);
        assert_eq!(grid.size(), n);
        assert!(!grid.percolates());
    }
}

#[test]
fn test_open_is_idempotent() {
    let mut grid = Percolation::new(3).unwrap();
    grid.open(2, 2).unwrap();
    assert_eq!(grid.number_of_open_sites(), 1);
    grid.open(2, 2).unwrap();
    grid.open(2, 2).unwrap();
    assert_eq!(grid.number_of_open_sites(), 1);
    assert!(!grid.percolates());
}

#[test]
fn test_is_open_is_permanent() {
    let mut grid = Percolation::new(4).unwrap();
    assert!(!grid.is_open(3, 2).unwrap());
    grid.open(3, 2).unwrap();
    assert!(grid.is_open(3, 2).unwrap());
    // Opening other sites never closes it
    for col in 1..=4 {
        grid.open(1, col).unwrap();
    }
    assert!(grid.is_open(3, 2).unwrap());
}

#[test]
fn test_vertical_column_percolates() {
    let mut grid = Percolation::new(5).unwrap();
    for row in 1..=4 {
        grid.open(row, 3).unwrap();
        assert!(!grid.percolates());
        assert!(grid.is_full(row, 3).unwrap());
    }
    grid.open(5, 3).unwrap();
    assert!(grid.percolates());
    assert!(grid.is_full(5, 3).unwrap());
    assert_eq!(grid.number_of_open_sites(), 5);
}

#[test]
fn test_percolates_is_monotonic() {
    let mut grid = Percolation::new(3).unwrap();
    for row in 1..=3 {
        grid.open(row, 1).unwrap();
    }
    assert!(grid.percolates());
    // Further opens anywhere cannot reset the latch
    for row in 1..=3 {
        for col in 1..=3 {
            grid.open(row, col).unwrap();
            assert!(grid.percolates());
        }
    }
}

#[test]
fn test_single_site_grid() {
    let mut grid = Percolation::new(1).unwrap();
    assert!(!grid.percolates());
    assert!(!grid.is_full(1, 1).unwrap());
    grid.open(1, 1).unwrap();
    assert!(grid.percolates());
    assert!(grid.is_full(1, 1).unwrap());
    assert_eq!(grid.number_of_open_sites(), 1);
}

#[test]
fn test_diagonal_sites_do_not_percolate() {
    let mut grid = Percolation::new(2).unwrap();
    grid.open(1, 1).unwrap();
    grid.open(2, 2).unwrap();
    assert!(!grid.percolates());
    assert!(grid.is_full(1, 1).unwrap());
    assert!(!grid.is_full(2, 2).unwrap());
}

#[test]
fn test_no_backwash() {
    // Spanning path down column 1; (3,3) is open in the bottom row but has
    // no path of its own to the top.
    let mut grid = Percolation::new(3).unwrap();
    for row in 1..=3 {
        grid.open(row, 1).unwrap();
    }
    grid.open(3, 3).unwrap();
    assert!(grid.percolates());
    assert!(grid.is_full(3, 1).unwrap());
    assert!(!grid.is_full(3, 3).unwrap());
    // Still not full after more unrelated opens elsewhere in its row
    grid.open(1, 3).unwrap();
    assert!(!grid.is_full(3, 3).unwrap());
}

#[test]
fn test_late_join_floods_isolated_component() {
    // Open sites form an L that only becomes full once connected to the top
    let mut grid = Percolation::new(4).unwrap();
    grid.open(3, 2).unwrap();
    grid.open(3, 3).unwrap();
    grid.open(2, 3).unwrap();
    for (row, col) in [(3, 2), (3, 3), (2, 3)] {
        assert!(!grid.is_full(row, col).unwrap());
    }
    grid.open(1, 3).unwrap();
    for (row, col) in [(3, 2), (3, 3), (2, 3), (1, 3)] {
        assert!(grid.is_full(row, col).unwrap());
    }
}

#[test]
fn test_horizontal_row_does_not_percolate() {
    let mut grid = Percolation::new(4).unwrap();
    for col in 1..=4 {
        grid.open(2, col).unwrap();
    }
    assert!(!grid.percolates());
    for col in 1..=4 {
        assert!(!grid.is_full(2, col).unwrap());
    }
}
