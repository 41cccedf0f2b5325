use crate::core::action::DifftoolAction;
use crate::core::command::DirectoryCompareCommand;
use crate::core::pickers::{SkimReferencePicker, SkimRepositoryPicker};

/// Concrete collaborator set used by the CLI host.
pub type CliCompareCommand =
    DirectoryCompareCommand<SkimRepositoryPicker, SkimReferencePicker, DifftoolAction>;

#[derive(Debug, Clone, Copy)]
pub struct AppContext {
    pub verbosity: u8,
}

impl AppContext {
    #[must_use]
    pub const fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Wire up the compare command with the CLI collaborators: skim-backed
    /// pickers and the difftool action.
    #[must_use]
    pub fn compare_command(&self) -> CliCompareCommand {
        DirectoryCompareCommand::new(SkimRepositoryPicker, SkimReferencePicker, DifftoolAction)
    }
}
