use std::time::Duration;

/// The built-in level, 6 rows by 5 columns.
pub const EMBEDDED_LEVEL: &str = r#"
#####
#@ .#
# $ #
# $.#
#   #
#####
"#;

pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub const CONFIG_ENV_VAR: &str = "GRID_PUZZLE_CONFIG";
