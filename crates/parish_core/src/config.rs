//! Explicit dashboard configuration.
//!
//! Branding, navigation and theme are plain data handed down at construction
//! time rather than ambient shell state, alongside the tunables the pages
//! read (contribution goal, simulated fetch delay, table page sizes).

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTRIBUTION_GOAL: f64 = 5000.0;
pub const DEFAULT_FETCH_DELAY_MS: u64 = 2000;

/// Sidebar navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum NavEntry {
    Header { title: String },
    Item { segment: String, title: String },
    Divider,
}

/// Color scheme selection for the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Light,
    Dark,
}

/// Shell branding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    pub title: String,
}

/// Complete dashboard configuration handed to services and views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub branding: Branding,
    pub navigation: Vec<NavEntry>,
    pub color_scheme: ColorScheme,
    /// Fundraising goal the contributions progress bar measures against.
    pub contribution_goal: f64,
    /// Artificial delay of the simulated startup fetch.
    pub fetch_delay_ms: u64,
    /// Page-size options offered by the tabular views.
    pub rows_per_page_options: Vec<usize>,
}

impl DashboardConfig {
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            branding: Branding {
                title: "Parish Management System".to_string(),
            },
            navigation: vec![
                NavEntry::Header {
                    title: "Main Menu".to_string(),
                },
                NavEntry::Item {
                    segment: "home".to_string(),
                    title: "Dashboard".to_string(),
                },
                NavEntry::Item {
                    segment: "members".to_string(),
                    title: "Members".to_string(),
                },
                NavEntry::Item {
                    segment: "events".to_string(),
                    title: "Events".to_string(),
                },
                NavEntry::Item {
                    segment: "contributions".to_string(),
                    title: "Contributions".to_string(),
                },
                NavEntry::Divider,
                NavEntry::Header {
                    title: "Analytics".to_string(),
                },
                NavEntry::Item {
                    segment: "reports".to_string(),
                    title: "Reports".to_string(),
                },
            ],
            color_scheme: ColorScheme::Light,
            contribution_goal: DEFAULT_CONTRIBUTION_GOAL,
            fetch_delay_ms: DEFAULT_FETCH_DELAY_MS,
            rows_per_page_options: vec![5, 10, 25],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DashboardConfig, NavEntry};

    #[test]
    fn default_config_mirrors_the_shipped_shell() {
        let config = DashboardConfig::default();
        assert_eq!(config.branding.title, "Parish Management System");
        assert_eq!(config.contribution_goal, 5000.0);
        assert_eq!(config.fetch_delay_ms, 2000);
        assert_eq!(config.rows_per_page_options, vec![5, 10, 25]);

        let segments: Vec<&str> = config
            .navigation
            .iter()
            .filter_map(|entry| match entry {
                NavEntry::Item { segment, .. } => Some(segment.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            segments,
            vec!["home", "members", "events", "contributions", "reports"]
        );
    }
}
