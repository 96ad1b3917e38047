use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::Config;
use crate::platform::Platform;
use crate::service::VersionQueryService;

/// Snapshot of what the service would answer
#[derive(Debug, Clone, Serialize)]
pub struct PlatformReport {
    pub channel: String,
    pub platform: String,
    pub os_version: String,
    pub platform_version: String,
    pub supported_methods: Vec<String>,
    pub service_version: String,
}

/// Collect a report from a service
pub fn collect_report<P: Platform>(config: &Config, service: &VersionQueryService<P>) -> PlatformReport {
    let platform = service.platform();
    let os_version = platform.os_version();

    PlatformReport {
        channel: config.channel.name.clone(),
        platform: platform.name().to_string(),
        platform_version: service.platform_version(),
        os_version,
        supported_methods: VersionQueryService::<P>::supported_methods()
            .iter()
            .map(|m| m.to_string())
            .collect(),
        service_version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Show platform and channel information
pub fn run_info(config: &Config, json: bool) -> Result<()> {
    let report = collect_report(config, &VersionQueryService::new());

    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", text);
        return Ok(());
    }

    println!("Platform Version Query Service v{}", report.service_version);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Channel:     {}", report.channel);
    println!("Platform:    {}", report.platform);
    println!("OS version:  {}", report.os_version);
    println!("Reply:       {}", report.platform_version);
    println!();
    println!("Supported methods:");
    for method in &report.supported_methods {
        println!("  - {}", method);
    }

    Ok(())
}
