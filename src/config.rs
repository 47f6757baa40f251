use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

static QUIET_ZONE_WIDTH: OnceLock<usize> = OnceLock::new();

/// Default quiet zone width in modules (`QR_QUIET_ZONE_WIDTH`, default 4).
pub fn default_quiet_zone_width() -> usize {
    *QUIET_ZONE_WIDTH.get_or_init(|| parse_env_usize("QR_QUIET_ZONE_WIDTH", 4))
}

static MODULE_SCALE: OnceLock<u32> = OnceLock::new();

/// Default pixels per module for raster output (`QR_MODULE_SCALE`, default 4).
pub fn default_module_scale() -> u32 {
    *MODULE_SCALE.get_or_init(|| parse_env_u32("QR_MODULE_SCALE", 4).clamp(1, 64))
}
