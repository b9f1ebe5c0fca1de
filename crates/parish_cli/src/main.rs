//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `parish_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use parish_core::DashboardConfig;

fn main() {
    let config = DashboardConfig::default();
    println!("parish_core ping={}", parish_core::ping());
    println!("parish_core version={}", parish_core::core_version());
    println!(
        "dashboard title=`{}` goal={} fetch_delay_ms={}",
        config.branding.title, config.contribution_goal, config.fetch_delay_ms
    );
}
