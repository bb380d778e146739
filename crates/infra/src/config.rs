use chrono_tz::{Tz, UTC};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Timezone of the planner user. Events are stored in local wall-clock
    /// time, so this decides what "now" means when looking for upcoming
    /// events.
    pub timezone: Tz,
    /// Whether the events of a recurring series are inserted into the
    /// store concurrently instead of one after the other. Concurrent inserts
    /// are faster but do not stop at the first failed insert.
    pub concurrent_inserts: bool,
}

impl Config {
    pub fn new() -> Self {
        let timezone = match std::env::var("PLANNER_TIMEZONE") {
            Ok(timezone) => match timezone.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given PLANNER_TIMEZONE: {} is not valid, falling back to UTC.",
                        timezone
                    );
                    UTC
                }
            },
            Err(_) => {
                info!("Did not find PLANNER_TIMEZONE environment variable. Going to use UTC.");
                UTC
            }
        };
        let concurrent_inserts = match std::env::var("PLANNER_CONCURRENT_INSERTS") {
            Ok(flag) => parse_flag(&flag).unwrap_or_else(|| {
                warn!(
                    "The given PLANNER_CONCURRENT_INSERTS: {} is not a boolean, falling back to sequential inserts.",
                    flag
                );
                false
            }),
            Err(_) => false,
        };
        Self {
            timezone,
            concurrent_inserts,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(flag: &str) -> Option<bool> {
    match flag.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
