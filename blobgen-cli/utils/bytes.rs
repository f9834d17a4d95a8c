//! Byte-size formatting helpers.

/// Format a byte count for human-readable output.
///
/// Uses `KiB` for values >= 1024 bytes, `MiB` for values >= 1 MiB and `GiB`
/// for values >= 1 GiB.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= GIB {
        format!("{:.1} GiB", bytes_f / GIB)
    } else if bytes_f >= MIB {
        format!("{:.1} MiB", bytes_f / MIB)
    } else if bytes_f >= KIB {
        format!("{:.1} KiB", bytes_f / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Format a size for the verbose summary, optionally appending raw bytes.
pub(crate) fn format_size_with_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format_size(bytes)
    } else {
        format!("{} ({bytes} B)", format_size(bytes))
    }
}

/// Format a throughput value as a size per second.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn format_throughput(bytes_per_sec: f64) -> String {
    if !bytes_per_sec.is_finite() || bytes_per_sec <= 0.0 {
        return "0 B/s".to_string();
    }
    format!("{}/s", format_size(bytes_per_sec as u64))
}
