use crate::grid::Grid;

/// Runs `grid` until it reaches `generations` and returns the dump.
///
/// The target is absolute: a grid already past it is dumped unchanged.
pub fn evolve(grid: &mut Grid, generations: u64) -> String {
    while grid.generation() < generations {
        grid.step();
    }
    log::info!(
        "stopped at generation {} with {} live cells",
        grid.generation(),
        grid.population()
    );
    grid.dump()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_generations_dumps_the_seed() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.seed("#####\n\n  #\n");
        assert_eq!(evolve(&mut grid, 0), "#####\n     \n  #  \n     \n     \n");
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn glider_returns_after_a_full_lap() {
        // A glider moves one cell diagonally every four generations, so on
        // an 8x8 torus it is back where it started after 32.
        let seed = " #      \n  #     \n###     \n        \n        \n        \n        \n        \n";
        let mut grid = Grid::new(8, 8).unwrap();
        grid.seed(seed);

        assert_eq!(evolve(&mut grid, 32), seed);
        assert_eq!(grid.generation(), 32);
    }

    #[test]
    fn blinker_parity() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.seed("\n\n ###\n");
        assert_eq!(evolve(&mut grid, 3), "     \n  #  \n  #  \n  #  \n     \n");
    }
}
