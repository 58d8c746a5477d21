//! Summary statistics for scalar fields

use crate::error::{Error, Result};
use crate::result_type::ResultType;
use std::fmt;

/// Number of entries in a full precomputed statistics table
pub const STATS_TABLE_LEN: usize = 27;

/// Minimum, average and maximum of a per-node scalar field, with the unit
/// label used for display.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SummaryStats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub unit: &'static str,
}

impl SummaryStats {
    /// All-zero statistics, shown when no result is selected
    pub fn zeros(unit: &'static str) -> Self {
        Self {
            min: 0.0,
            avg: 0.0,
            max: 0.0,
            unit,
        }
    }

    /// Compute statistics from a scalar array.
    ///
    /// Fails with [`Error::EmptyResult`] on an empty array; the average of
    /// zero values is undefined.
    pub fn summarize(values: &[f64], unit: &'static str) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyResult);
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        Ok(Self {
            min,
            avg: sum / values.len() as f64,
            max,
            unit,
        })
    }

    /// Read statistics for a result type out of a precomputed solver table.
    ///
    /// The table holds (min, avg, max) triples at fixed offsets per result
    /// type. Returns `None` when the type has no slot (temperature and
    /// user-defined results are always computed from the raw values) or when
    /// the table is too short to contain the triple.
    pub fn from_table(table: &[f64], result_type: ResultType) -> Option<Self> {
        if result_type == ResultType::None {
            return Some(Self::zeros(result_type.unit()));
        }
        let offset = stats_table_offset(result_type)?;
        let triple = table.get(offset..offset + 3)?;
        Some(Self {
            min: triple[0],
            avg: triple[1],
            max: triple[2],
            unit: result_type.unit(),
        })
    }
}

/// Offset of a result type's (min, avg, max) triple in the solver table.
///
/// The table layout also reserves slots 18..21 for the middle principal
/// stress, which is not selectable in the panel.
fn stats_table_offset(result_type: ResultType) -> Option<usize> {
    match result_type {
        ResultType::DisplacementX => Some(0),
        ResultType::DisplacementY => Some(3),
        ResultType::DisplacementZ => Some(6),
        ResultType::DisplacementAbs => Some(9),
        ResultType::VonMises => Some(12),
        ResultType::PrincipalMax => Some(15),
        ResultType::PrincipalMin => Some(21),
        ResultType::MaxShear => Some(24),
        _ => None,
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min: {:.6} {u}, avg: {:.6} {u}, max: {:.6} {u}",
            self.min,
            self.avg,
            self.max,
            u = self.unit
        )
    }
}
