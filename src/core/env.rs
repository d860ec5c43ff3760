//! Host detection for run reports.

use serde::{Deserialize, Serialize};

/// Host information recorded alongside timings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ram_bytes: Option<u64>,

    pub os: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

impl Default for EnvironmentInfo {
    fn default() -> Self {
        EnvironmentInfo {
            cpu_model: None,
            cpu_cores: None,
            total_ram_bytes: None,
            os: std::env::consts::OS.to_string(),
            hostname: None,
        }
    }
}

impl EnvironmentInfo {
    /// Detect environment information from the current system
    pub fn detect() -> Self {
        use sysinfo::System;

        let mut sys = System::new();
        sys.refresh_cpu();
        sys.refresh_memory();

        EnvironmentInfo {
            cpu_model: sys.cpus().first().map(|c| c.brand().trim().to_string()).filter(|s| !s.is_empty()),
            cpu_cores: sys.physical_core_count().map(|c| c as u32),
            total_ram_bytes: Some(sys.total_memory()),
            os: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
            hostname: System::host_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_detect_has_os() {
        let env = EnvironmentInfo::detect();
        assert!(!env.os.is_empty());
    }

    #[test]
    fn test_default_omits_unknown_fields() {
        let json = serde_json::to_value(EnvironmentInfo::default()).unwrap();
        assert!(json.get("os").is_some());
        assert!(json.get("cpu_model").is_none());
        assert!(json.get("hostname").is_none());
    }
}
