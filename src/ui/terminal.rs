//! Terminal capability detection

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub stdout_tty: bool,
    pub stdin_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        std::io::stdin().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    stdout_tty: bool,
    stdin_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        stdout_tty,
        stdin_tty,
        supports_color: stdout_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && !ascii_locale(&get_env),
        is_ci: is_ci_env(&get_env),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["CI", "GITHUB_ACTIONS", "BUILDKITE", "CIRCLECI"];
    KEYS.iter().any(|k| get_env(k).is_some())
}

/// `LANG=C` / `POSIX` terminals get ASCII icons; everything else is assumed
/// to handle UTF-8.
fn ascii_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|k| get_env(k).filter(|v| !v.is_empty()))
        .map(|v| matches!(v.as_str(), "C" | "POSIX"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(env: &[(&str, &str)], tty: bool) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_capabilities_impl(|k| map.get(k).cloned(), tty, tty)
    }

    #[test]
    fn no_color_disables_color() {
        assert!(!caps(&[("NO_COLOR", "1")], true).supports_color);
        assert!(caps(&[("TERM", "xterm-256color")], true).supports_color);
    }

    #[test]
    fn pipes_never_get_color() {
        assert!(!caps(&[("TERM", "xterm-256color")], false).supports_color);
    }

    #[test]
    fn c_locale_and_dumb_term_fall_back_to_ascii() {
        assert!(!caps(&[("LANG", "C")], true).supports_unicode);
        assert!(!caps(&[("TERM", "dumb")], true).supports_unicode);
        assert!(caps(&[("LANG", "en_US.UTF-8")], true).supports_unicode);
    }

    #[test]
    fn ci_is_detected() {
        assert!(caps(&[("GITHUB_ACTIONS", "true")], false).is_ci);
    }
}
