use std::sync::OnceLock;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

static MODULE_PX: OnceLock<u32> = OnceLock::new();

/// Default pixels per module for rendered output (`QR_MODULE_PX`)
pub fn default_module_px() -> u32 {
    *MODULE_PX.get_or_init(|| parse_env_u32("QR_MODULE_PX", 4).clamp(1, 64))
}

static RASTER_SUPERSAMPLE: OnceLock<u32> = OnceLock::new();

/// Supersampling factor for bitmap export (`QR_RASTER_SUPERSAMPLE`)
pub fn default_raster_supersample() -> u32 {
    *RASTER_SUPERSAMPLE.get_or_init(|| parse_env_u32("QR_RASTER_SUPERSAMPLE", 4).clamp(1, 16))
}
