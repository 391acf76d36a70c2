//! Passenger-list export. Pure and synchronous: both renderers operate on
//! an already-fetched booking list and never touch the network.

mod csv;
mod pdf;

pub use csv::{passenger_csv, PASSENGER_HEADERS};
pub use pdf::passenger_pdf;

/// `<prefix>-<ISO date>.<ext>`, e.g. `passageiros-2025-01-10.csv`.
pub fn export_filename(prefix: &str, ext: &str) -> String {
    format!("{}-{}.{}", prefix, chrono::Utc::now().format("%Y-%m-%d"), ext)
}

/// Birth dates arrive as ISO strings ("1990-05-12T00:00:00.000Z"); exports
/// keep only the date part.
pub(crate) fn short_date(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_carries_iso_date() {
        let name = export_filename("passageiros", "csv");
        assert!(name.starts_with("passageiros-"));
        assert!(name.ends_with(".csv"));
        // passageiros-YYYY-MM-DD.csv
        assert_eq!(name.len(), "passageiros-".len() + 10 + ".csv".len());
    }

    #[test]
    fn short_date_strips_time() {
        assert_eq!(short_date("1990-05-12T00:00:00.000Z"), "1990-05-12");
        assert_eq!(short_date("1990-05-12"), "1990-05-12");
    }
}
