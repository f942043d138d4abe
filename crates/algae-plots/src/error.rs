use std::error::Error;
use std::fmt;
use std::io;

/// Errors raised while building or showing a figure.
#[derive(Debug)]
pub enum PlotError {
    /// Trajectory column count does not match the time vector length.
    LengthMismatch { expected: usize, found: usize },
    /// Trajectory array does not have exactly two rows (P and N).
    NotTwoRows(usize),
    /// Trajectory or time vector has no samples.
    Empty,
    /// The figure needs more axes than the plotly layout exposes.
    TooManyAxes(usize),
    /// An axis handle that does not belong to this figure.
    UnknownAxes(String),
    /// A curve id that does not belong to this figure.
    UnknownCurve(usize),
    Io(io::Error),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlotError::LengthMismatch { expected, found } => write!(
                f,
                "Trajectory has {} time steps but the time vector has {} entries",
                found, expected
            ),
            PlotError::NotTwoRows(rows) => write!(
                f,
                "Trajectory must have exactly 2 rows (P, N), got {}",
                rows
            ),
            PlotError::Empty => write!(f, "Trajectory must contain at least one time step"),
            PlotError::TooManyAxes(n) => {
                write!(f, "Figure requires axis #{} but at most 8 are supported", n)
            }
            PlotError::UnknownAxes(axis) => {
                write!(f, "Axis {} does not belong to this figure", axis)
            }
            PlotError::UnknownCurve(id) => {
                write!(f, "Curve #{} does not belong to this figure", id)
            }
            PlotError::Io(e) => write!(f, "Failed to write figure: {}", e),
        }
    }
}

impl Error for PlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlotError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(e: io::Error) -> Self {
        PlotError::Io(e)
    }
}
