// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of the per-vehicle analytics table.

use thiserror::Error;

use fleetflow_domain::VehicleStats;

/// Errors that can occur while building the CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders the analytics table as CSV.
///
/// One row per entry, with the dashboard's export header. The caller
/// decides the file name (`fleet_analytics.csv` on the dashboard).
///
/// # Errors
///
/// Returns an error if CSV serialization fails.
pub fn export_vehicle_stats_csv(stats: &[VehicleStats]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Vehicle",
        "Fuel Cost",
        "Maintenance Cost",
        "Efficiency (km/L)",
        "ROI (%)",
    ])?;

    for entry in stats {
        writer.write_record([
            entry.label.clone(),
            entry.fuel_cost.to_string(),
            entry.maintenance_cost.to_string(),
            entry.fuel_efficiency.to_string(),
            entry.roi.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8(bytes)?)
}
