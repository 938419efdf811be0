//! CLI for mcview, the Minecraft profile viewer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use mcview_core::config;
use mcview_core::{LayoutMode, Pose};

use commands::{
    run_completions, run_decode, run_interactive, run_lookup, run_poses, run_reroll, run_urls,
};

/// Top-level CLI for mcview.
#[derive(Debug, Parser)]
#[command(name = "mcview")]
#[command(about = "mcview: look up Minecraft profiles, skins and capes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Look up a player by username and show the profile card.
    Lookup {
        /// Player username (1-16 chars: letters, digits, underscore).
        username: String,

        /// Skin render pose (random if omitted).
        #[arg(long)]
        pose: Option<Pose>,

        /// Card layout: fixed or responsive (default from config).
        #[arg(long)]
        layout: Option<LayoutMode>,

        /// Print the profile card as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Decode a Base64 `textures` property value and print it as JSON.
    Decode {
        /// Base64 value of the textures property.
        value: String,
    },

    /// List all skin render poses.
    Poses,

    /// Print poses that follow `pose` under reroll (never repeating the previous one).
    Reroll {
        /// Starting pose.
        pose: Pose,

        /// How many rerolls to print.
        #[arg(long, default_value = "1", value_name = "N")]
        count: usize,
    },

    /// Print the external asset URLs for a UUID without fetching anything.
    Urls {
        /// Profile UUID, with or without dashes.
        uuid: String,

        /// Skin render pose (random if omitted).
        #[arg(long)]
        pose: Option<Pose>,
    },

    /// Interactive session: type a username to search, `:r` to reroll the pose, `:q` to quit.
    Interactive {
        /// Card layout: fixed or responsive (default from config).
        #[arg(long)]
        layout: Option<LayoutMode>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Lookup {
                username,
                pose,
                layout,
                json,
            } => {
                let layout = layout.unwrap_or(cfg.layout);
                run_lookup(&cfg, &username, pose, layout, json).await?
            }
            CliCommand::Decode { value } => run_decode(&value)?,
            CliCommand::Poses => run_poses(),
            CliCommand::Reroll { pose, count } => run_reroll(pose, count),
            CliCommand::Urls { uuid, pose } => run_urls(&cfg, &uuid, pose)?,
            CliCommand::Interactive { layout } => {
                run_interactive(&cfg, layout.unwrap_or(cfg.layout)).await?
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
