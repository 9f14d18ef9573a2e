use geo::Point;

/// Estimate of the remaining distance used to order the A* frontier.
///
/// Only [`Heuristic::Euclidean`] and [`Heuristic::Zero`] never overestimate
/// on planar coordinates; with [`Heuristic::Manhattan`] the search returns an
/// approximately shortest route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// `|dx| + |dy|`
    #[default]
    Manhattan,
    /// Straight-line distance
    Euclidean,
    /// No estimate, the search degrades to Dijkstra
    Zero,
}

impl Heuristic {
    pub fn estimate(self, from: Point<f64>, to: Point<f64>) -> f64 {
        let dx = from.x() - to.x();
        let dy = from.y() - to.y();
        match self {
            Heuristic::Manhattan => dx.abs() + dy.abs(),
            Heuristic::Euclidean => dx.hypot(dy),
            Heuristic::Zero => 0.0,
        }
    }
}
