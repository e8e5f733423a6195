use anyhow::{Context, Result};
use chatmark_config::MessageType;
use std::io::Write;
use std::path::Path;

/// Wraps a rendered fragment in the container the chat widget uses per message.
pub fn wrap_message(html: &str, message_type: MessageType) -> String {
    format!(r#"<div class="{}">{html}</div>"#, message_type.css_class())
}

/// Writes the fragment plus a trailing newline to `path`, or stdout if `None`.
pub fn write(html: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, format!("{html}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} bytes to {}", html.len() + 1, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{html}").context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
