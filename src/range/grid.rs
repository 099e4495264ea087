/// `points` evenly spaced values from lo to hi inclusive. The last value is
/// exactly hi. `points` must be at least 2.
pub fn linspace(lo: f64, hi: f64, points: usize) -> Vec<f64> {
    let step = (hi - lo) / (points - 1) as f64;
    let mut grid: Vec<f64> = (0..points).map(|i| lo + step * i as f64).collect();
    if let Some(last) = grid.last_mut() {
        *last = hi;
    }
    grid
}
