//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`.
/// A leading `~` is expanded first.
/// Returns the absolute path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/dist/menu/  ← cwd
/// /home/user/site/restohead.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let expanded = shellexpand::tilde(config_name.to_str()?).into_owned();
    let config_name = Path::new(&expanded);

    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd, config_name)
}

/// Walk up from `start` looking for `name`.
fn find_upward(start: &Path, name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Check that `value` is an absolute http(s) URL with a host.
///
/// Returns the problem as a message, `None` when the URL is fine.
pub fn check_http_url(value: &str) -> Option<String> {
    match url::Url::parse(value) {
        Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => Some(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        )),
        Ok(parsed) if parsed.host_str().is_none() => Some("URL must have a valid host".into()),
        Ok(_) => None,
        Err(e) => Some(format!("invalid URL: {e}")),
    }
}

/// Check a `HH:MM` 24-hour time of day.
pub fn is_time_of_day(value: &str) -> bool {
    let Some((h, m)) = value.split_once(':') else {
        return false;
    };
    let digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(h) || !digits(m) {
        return false;
    }
    matches!(
        (h.parse::<u8>(), m.parse::<u8>()),
        (Ok(h), Ok(m)) if h < 24 && m < 60
    )
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_http_url() {
        assert_eq!(check_http_url("https://example.com"), None);
        assert_eq!(check_http_url("http://example.com:8080/a"), None);
        assert!(check_http_url("ftp://example.com").unwrap().contains("ftp"));
        assert!(check_http_url("not a url").unwrap().starts_with("invalid URL"));
    }

    #[test]
    fn test_is_time_of_day() {
        assert!(is_time_of_day("12:00"));
        assert!(is_time_of_day("23:59"));
        assert!(is_time_of_day("00:00"));
        assert!(!is_time_of_day("24:00"));
        assert!(!is_time_of_day("9:30"));
        assert!(!is_time_of_day("18h30"));
        assert!(!is_time_of_day("+1:30"));
    }

    #[test]
    fn test_find_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("dist/menu");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("restohead.toml"), "").unwrap();

        let found = find_upward(&nested, Path::new("restohead.toml")).unwrap();
        assert_eq!(found, dir.path().join("restohead.toml"));
        assert!(find_upward(&nested, Path::new("missing-config.toml")).is_none());
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brand.toml");
        assert!(find_config_file(&path).is_none());

        std::fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path), Some(path));
    }
}
