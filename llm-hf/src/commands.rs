//! The `hf` command group: `add`, `rm` and `list`.
//!
//! Argument parsing belongs to the host; it hands over an [`HfCommand`].

use std::io::Write;

use llm_hf_registry::ModelRegistry;

use crate::error::PluginResult;

/// Name of the command group.
pub const GROUP_NAME: &str = "hf";

/// One `hf` sub-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HfCommand {
    /// `hf add <model_id>`
    Add {
        /// Identifier to subscribe to.
        model_id: String,
    },
    /// `hf rm <model_id>`
    Remove {
        /// Identifier to drop.
        model_id: String,
    },
    /// `hf list`
    List,
}

impl HfCommand {
    /// Sub-command name as typed by the user.
    pub fn name(&self) -> &'static str {
        match self {
            HfCommand::Add { .. } => "add",
            HfCommand::Remove { .. } => "rm",
            HfCommand::List => "list",
        }
    }
}

/// Run a command against `registry`, writing `list` output to `out`.
pub fn run(
    command: &HfCommand,
    registry: &dyn ModelRegistry,
    out: &mut dyn Write,
) -> PluginResult<()> {
    match command {
        HfCommand::Add { model_id } => {
            registry.add(model_id)?;
        }
        HfCommand::Remove { model_id } => {
            registry.remove(model_id)?;
        }
        HfCommand::List => {
            for model in registry.load()? {
                writeln!(out, "{model}")?;
            }
        }
    }
    Ok(())
}
