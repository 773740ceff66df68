//! Typed observation rows for the cost-allocation fit.

use serde::{Deserialize, Serialize};

/// One agency/service observation in the regression dataset.
///
/// The computation only ever needs these four fields, so rows are a fixed
/// strongly-typed struct rather than a generic dynamically-typed table. All
/// numeric fields are non-negative in real datasets; the fit itself imposes
/// no sign constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationRow {
    /// Fixed (train) service hours for the observation period.
    pub fixed_unit_hours: f64,
    /// Incremental (car) service hours for the observation period.
    pub incremental_unit_hours: f64,
    /// Whether the agency belongs to the peer comparison group.
    pub is_peer: bool,
    /// Total operating cost, the dependent variable.
    pub total_cost: f64,
}

impl ObservationRow {
    /// Creates an observation row.
    #[must_use]
    pub fn new(
        fixed_unit_hours: f64,
        incremental_unit_hours: f64,
        is_peer: bool,
        total_cost: f64,
    ) -> Self {
        Self {
            fixed_unit_hours,
            incremental_unit_hours,
            is_peer,
            total_cost,
        }
    }

    /// The peer indicator encoded as 0.0 or 1.0 for the design matrix.
    #[must_use]
    pub fn peer_indicator(&self) -> f64 {
        if self.is_peer { 1.0 } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peer_indicator_encoding() {
        assert_eq!(ObservationRow::new(1.0, 2.0, false, 3.0).peer_indicator(), 0.0);
        assert_eq!(ObservationRow::new(1.0, 2.0, true, 3.0).peer_indicator(), 1.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let row = ObservationRow::new(120.5, 480.25, true, 1_250_000.0);
        let json = serde_json::to_string(&row).unwrap();
        let back: ObservationRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
    }
}
