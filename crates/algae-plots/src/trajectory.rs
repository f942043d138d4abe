use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::error::PlotError;

/// Row holding the biomass density P(t).
pub const P_ROW: usize = 0;
/// Row holding the nutrient density N(t).
pub const N_ROW: usize = 1;

/// A 2×T trajectory of the algae/nutrient system.
///
/// Row 0 holds P(t) and row 1 holds N(t); column `j` is the state at the
/// `j`-th time step. Both rows always share the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    states: Array2<f64>,
}

impl Trajectory {
    /// Wrap a `[variable, time-step]` array.
    ///
    /// Fails if the array does not have exactly two rows or has no columns.
    pub fn new(states: Array2<f64>) -> Result<Self, PlotError> {
        if states.nrows() != 2 {
            return Err(PlotError::NotTwoRows(states.nrows()));
        }
        if states.ncols() == 0 {
            return Err(PlotError::Empty);
        }
        Ok(Self { states })
    }

    /// Build a trajectory from separate P and N series.
    pub fn from_rows(p: Vec<f64>, n: Vec<f64>) -> Result<Self, PlotError> {
        if p.len() != n.len() {
            return Err(PlotError::LengthMismatch {
                expected: p.len(),
                found: n.len(),
            });
        }
        let states = Array2::from_shape_fn((2, p.len()), |(row, col)| {
            if row == P_ROW {
                p[col]
            } else {
                n[col]
            }
        });
        Self::new(states)
    }

    /// Number of time steps T.
    pub fn len(&self) -> usize {
        self.states.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.states.ncols() == 0
    }

    pub fn p(&self) -> ArrayView1<'_, f64> {
        self.states.index_axis(Axis(0), P_ROW)
    }

    pub fn n(&self) -> ArrayView1<'_, f64> {
        self.states.index_axis(Axis(0), N_ROW)
    }

    /// P(0), the value shown in multi-panel titles.
    pub fn initial_p(&self) -> f64 {
        self.states[[P_ROW, 0]]
    }

    /// N(0), the reference nutrient level for the equilibrium overlay.
    pub fn initial_n(&self) -> f64 {
        self.states[[N_ROW, 0]]
    }

    pub fn states(&self) -> &Array2<f64> {
        &self.states
    }

    /// Check that `time` lines up index-for-index with the trajectory columns.
    pub fn check_time(&self, time: &Array1<f64>) -> Result<(), PlotError> {
        if time.len() != self.len() {
            return Err(PlotError::LengthMismatch {
                expected: time.len(),
                found: self.len(),
            });
        }
        if time.iter().zip(time.iter().skip(1)).any(|(a, b)| b < a) {
            log::warn!("Time vector is not monotonically non-decreasing; curves may fold back");
        }
        Ok(())
    }
}

impl TryFrom<Array2<f64>> for Trajectory {
    type Error = PlotError;

    fn try_from(states: Array2<f64>) -> Result<Self, Self::Error> {
        Trajectory::new(states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn rows_map_to_p_and_n() {
        let traj = Trajectory::new(array![[1.0, 2.0, 3.0], [5.0, 6.0, 7.0]]).unwrap();
        assert_eq!(traj.len(), 3);
        assert_eq!(traj.p().to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(traj.n().to_vec(), vec![5.0, 6.0, 7.0]);
        assert_eq!(traj.initial_p(), 1.0);
        assert_eq!(traj.initial_n(), 5.0);
    }

    #[test]
    fn rejects_wrong_row_count() {
        let err = Trajectory::new(array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap_err();
        assert!(matches!(err, PlotError::NotTwoRows(3)));
    }

    #[test]
    fn rejects_zero_columns() {
        let err = Trajectory::new(Array2::zeros((2, 0))).unwrap_err();
        assert!(matches!(err, PlotError::Empty));
    }

    #[test]
    fn from_rows_requires_equal_lengths() {
        assert!(Trajectory::from_rows(vec![1.0, 2.0], vec![3.0]).is_err());
        let traj = Trajectory::from_rows(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
        assert_eq!(traj.p().to_vec(), vec![1.0, 2.0]);
        assert_eq!(traj.n().to_vec(), vec![3.0, 4.0]);
        assert_eq!(traj.states(), &array![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn from_rows_rejects_empty_series() {
        let err = Trajectory::from_rows(Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, PlotError::Empty));
    }

    #[test]
    fn check_time_detects_mismatch() {
        let traj = Trajectory::from_rows(vec![1.0, 2.0, 3.0], vec![5.0, 5.0, 5.0]).unwrap();
        assert!(traj.check_time(&array![0.0, 1.0, 2.0]).is_ok());
        let err = traj.check_time(&array![0.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::LengthMismatch {
                expected: 2,
                found: 3
            }
        ));
    }
}
