use std::path::PathBuf;

use log::LevelFilter;
use npicon::prelude::*;
use npicon_services::icon::export;

/// Level requested by `[general] log_level`, if it names one.
fn configured_level(config: &Config) -> Option<LevelFilter> {
    config.general.log_level.as_deref()?.trim().parse().ok()
}

fn main() -> anyhow::Result<()> {
    // Settings loading logs, so the logger comes first. RUST_LOG, when set,
    // takes precedence over the configured level.
    let from_env = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();
    if !from_env {
        log::set_max_level(LevelFilter::Info);
    }

    let settings = SettingsRegistry::new().unwrap_or_else(|e| {
        log::error!("Failed to load settings, using defaults: {}", e);
        SettingsRegistry::with_defaults()
    });
    let config = settings.get();
    if !from_env {
        if let Some(level) = configured_level(config) {
            log::set_max_level(level);
        }
    }

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("icons"));
    std::fs::create_dir_all(&out_dir)?;

    let mut icons = IconService::from_settings(config);

    let ids: Vec<IconId> = icons.registry().ids().collect();
    for id in ids {
        let bitmap = icons.get(id);
        let path = out_dir.join(format!("{}.png", id.name()));
        export::save_png(&bitmap, &path)?;
        log::info!("{} -> {:?} ({} px painted)", id, path, bitmap.painted_count());
    }

    let stats = icons.cache_stats();
    log::info!(
        "Wrote {} icons at {}px ({} cache hits, {} misses)",
        icons.cached_len(),
        icons.size(),
        stats.hits,
        stats.misses
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level() {
        let config = Config::from_toml("[general]\nlog_level = \"debug\"").unwrap();
        assert_eq!(configured_level(&config), Some(LevelFilter::Debug));

        let noisy = Config::from_toml("[general]\nlog_level = \"loud\"").unwrap();
        assert_eq!(configured_level(&noisy), None);
        assert_eq!(configured_level(&Config::default()), None);
    }
}
