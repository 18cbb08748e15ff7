/// Current resident set size in whole megabytes, from /proc/self/status.
///
/// Returns 0 when the value cannot be read or parsed; a missing probe is
/// "no measurement", never a benchmark failure.
#[cfg(target_os = "linux")]
pub fn resident_memory_mb() -> u64 {
    let status = match std::fs::read_to_string("/proc/self/status") {
        Ok(content) => content,
        Err(_) => return 0,
    };

    for line in status.lines() {
        if line.starts_with("VmRSS:") {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if let Some(kb) = parts.get(1) {
                return kb.parse::<u64>().unwrap_or(0) / 1024;
            }
        }
    }
    0
}

#[cfg(not(target_os = "linux"))]
pub fn resident_memory_mb() -> u64 {
    use std::sync::Once;
    static WARN_ONCE: Once = Once::new();
    WARN_ONCE.call_once(|| {
        log::warn!("resident memory measurement is not supported on this platform; reporting 0 MB");
    });
    0
}
