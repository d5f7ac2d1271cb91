use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// How command output should be rendered for this invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
    /// Prompts are allowed (both ends are a terminal, not CI, not JSON).
    pub interactive: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8) -> Self {
        Self::from_caps(json, verbose, detect_capabilities())
    }

    pub(crate) fn from_caps(json: bool, verbose: u8, caps: TerminalCapabilities) -> Self {
        Self {
            json,
            verbose,
            color: !json && caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
            interactive: !json && caps.stdin_tty && caps.stdout_tty && !caps.is_ci,
        }
    }
}
