//! Route views and the formatting helpers they share

pub mod drone_history;
pub mod drone_list;
pub mod logs;
pub mod map;
pub mod not_found;

pub use drone_history::DroneHistory;
pub use drone_list::DroneList;
pub use logs::LogView;
pub use map::MapView;
pub use not_found::NotFound;

/// Coordinate in degrees with six decimals, or a dash when unknown
pub fn format_coordinate(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.6}", v))
}

/// Metric value with two decimals and a unit, or a dash when unknown
pub fn format_measure(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2} {}", v, unit))
}

/// File size in B, KiB or MiB
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    match bytes {
        b if b >= MIB => format!("{:.1} MiB", b as f64 / MIB as f64),
        b if b >= KIB => format!("{:.1} KiB", b as f64 / KIB as f64),
        b => format!("{} B", b),
    }
}
