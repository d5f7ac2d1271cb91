use std::path::PathBuf;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    file: Option<PathBuf>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: None,
            fix: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut lines = self.message.lines();
        let first = lines.next().unwrap_or_default();

        let mut out = format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(first).bold().render(supports_color)
        );
        for line in lines {
            out.push_str(&format!("  {}\n", line.trim_start()));
        }
        if let Some(file) = &self.file {
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim(format!("file: {}", file.display())).render(supports_color)
            ));
        }
        if let Some(fix) = &self.fix {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.render(supports_unicode),
                ColoredText::info(format!("Fix: {fix}")).render(supports_color)
            ));
        }
        out
    }
}
