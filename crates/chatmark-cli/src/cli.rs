use chatmark_config::{Config, MessageType};
use chatmark_engine::RenderOptions;
use clap::Parser;
use std::path::PathBuf;

/// Render chat message markdown to a safe HTML fragment.
#[derive(Debug, Parser)]
#[command(name = "chatmark", version, about)]
pub struct Cli {
    /// Markdown file to render. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Write the fragment here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/chatmark/config.toml.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Render numbered lists as <ol>.
    #[arg(long)]
    pub ordered_lists: bool,

    /// Wrap the fragment in a chat message container.
    #[arg(long)]
    pub wrap: bool,

    /// Container flavour used with --wrap: user or system.
    #[arg(long)]
    pub message_type: Option<MessageType>,
}

/// Effective settings after command-line flags are laid over the config file.
#[derive(Debug, PartialEq, Eq)]
pub struct Settings {
    pub render: RenderOptions,
    pub wrap: bool,
    pub message_type: MessageType,
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn settings(&self, config: Config) -> Settings {
        Settings {
            render: RenderOptions {
                ordered_lists: self.ordered_lists || config.render.ordered_lists,
            },
            wrap: self.wrap || config.output.wrap,
            message_type: self.message_type.unwrap_or(config.output.message_type),
            output: self.output.clone().or(config.output.path),
        }
    }
}
