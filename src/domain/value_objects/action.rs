use std::fmt;

/// A base operation performed against a single project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    /// Clone the project from the hosting service
    Clone,
    /// Pull new commits into an existing checkout
    Pull,
    /// Build and install the checkout
    Install,
    /// Remove the installed package
    Uninstall,
    /// Remove build artifacts from the checkout
    Clean,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Clone => "clone",
            Operation::Pull => "pull",
            Operation::Install => "install",
            Operation::Uninstall => "uninstall",
            Operation::Clean => "clean",
        };
        f.write_str(name)
    }
}

/// An action name accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Clone,
    Pull,
    Install,
    Uninstall,
    Clean,
    /// pull, then install
    Update,
    /// pull, clean, uninstall, then install
    CleanUpdate,
}

impl Action {
    /// Every supported action, in help-text order
    pub const ALL: [Action; 7] = [
        Action::Clone,
        Action::Pull,
        Action::Install,
        Action::Uninstall,
        Action::Clean,
        Action::Update,
        Action::CleanUpdate,
    ];

    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Action::Clone => "clone",
            Action::Pull => "pull",
            Action::Install => "install",
            Action::Uninstall => "uninstall",
            Action::Clean => "clean",
            Action::Update => "update",
            Action::CleanUpdate => "clean_update",
        }
    }

    /// Look up an action by its command-line name
    pub fn from_name(name: &str) -> Option<Action> {
        Self::ALL.iter().copied().find(|action| action.name() == name)
    }

    /// Base operations this action runs, in execution order
    pub fn operations(self) -> &'static [Operation] {
        match self {
            Action::Clone => &[Operation::Clone],
            Action::Pull => &[Operation::Pull],
            Action::Install => &[Operation::Install],
            Action::Uninstall => &[Operation::Uninstall],
            Action::Clean => &[Operation::Clean],
            Action::Update => &[Operation::Pull, Operation::Install],
            Action::CleanUpdate => &[
                Operation::Pull,
                Operation::Clean,
                Operation::Uninstall,
                Operation::Install,
            ],
        }
    }

    /// One-line description for the help text
    pub fn description(self) -> &'static str {
        match self {
            Action::Clone => "clone from the hosting service and register the project",
            Action::Pull => "pull new commits",
            Action::Install => "build and install",
            Action::Uninstall => "remove the installed package",
            Action::Clean => "remove build artifacts",
            Action::Update => "pull, then install",
            Action::CleanUpdate => "pull, clean, uninstall, then install",
        }
    }

    /// Help-text section listing every action
    pub fn help_table() -> String {
        let mut table = String::from("Actions:\n");
        for action in Self::ALL {
            table.push_str(&format!("  {:<14}{}\n", action.name(), action.description()));
        }
        table
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
