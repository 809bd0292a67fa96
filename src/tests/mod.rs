mod propagation;

use crate::engine::variables::VariableId;
use crate::results::Solution;

/// The sample board of the puzzle collection; its grid has the single solution
///
/// ```text
/// 2 1 3
/// 1 3 2
/// 3 2 1
/// ```
const SAMPLE_BOARD: &str = r#"(3, [(3,[(1,1), (2,1)],"+"),(1, [(1,2)], '?'), (8, [(1,3), (2,3), (2,2)], "+"), (3, [(3,1)], '?'), (3, [(3,2), (3,3)], "+")])"#;

const SAMPLE_SOLUTION: [i32; 9] = [2, 1, 3, 1, 3, 2, 3, 2, 1];

/// The values of the row-major `cells` in `solution`.
fn grid_values(solution: &Solution, cells: &[VariableId]) -> Vec<i32> {
    cells
        .iter()
        .map(|&cell| {
            solution
                .get_integer_value(cell)
                .expect("grid cells are integer variables")
        })
        .collect()
}
