//! Build identification
//!
//! `build.rs` stamps every compile with a counter and a UTC timestamp. Both
//! are optional so the crate still builds when the script did not run.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const BUILD_NUMBER: Option<&str> = option_env!("FITTRACKER_BUILD_NUMBER");
const BUILT_AT: Option<&str> = option_env!("FITTRACKER_BUILD_TIMESTAMP");

/// Compile counter, 0 when unknown
pub fn build_number() -> u64 {
    BUILD_NUMBER.and_then(|n| n.parse().ok()).unwrap_or(0)
}

/// e.g. `fittracker 1.0.0 build 12 (2026-10-17T08:00:00Z)`
pub fn banner() -> String {
    let mut banner = format!(
        "{} {} build {}",
        env!("CARGO_PKG_NAME"),
        VERSION,
        build_number()
    );
    if let Some(at) = BUILT_AT {
        banner.push_str(&format!(" ({})", at));
    }
    banner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_names_package_and_version() {
        let banner = banner();
        assert!(banner.starts_with("fittracker "));
        assert!(banner.contains(VERSION));
        assert!(banner.contains(&format!("build {}", build_number())));
    }
}
