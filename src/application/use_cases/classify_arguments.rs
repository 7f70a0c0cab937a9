use std::collections::BTreeSet;

use crate::common::error::PkgdevError;
use crate::common::result::PkgdevResult;
use crate::domain::value_objects::Action;

/// Command-line arguments split into actions and targets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassifiedArguments {
    /// Requested actions, in first-occurrence order without repeats
    pub actions: Vec<Action>,

    /// Every argument that is not an action name
    pub targets: BTreeSet<String>,
}

impl ClassifiedArguments {
    pub fn has_action(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }
}

/// Strip trailing path separators left behind by shell completion
fn normalize(arg: &str) -> &str {
    arg.trim_end_matches(|c: char| c == '/' || std::path::is_separator(c))
}

/// Split `args` into actions and targets by membership in the action table
pub fn classify_arguments<S: AsRef<str>>(args: &[S]) -> PkgdevResult<ClassifiedArguments> {
    let mut classified = ClassifiedArguments::default();

    for arg in args {
        let arg = normalize(arg.as_ref());
        if arg.is_empty() {
            continue;
        }
        match Action::from_name(arg) {
            Some(action) => {
                if !classified.actions.contains(&action) {
                    classified.actions.push(action);
                }
            }
            None => {
                classified.targets.insert(arg.to_string());
            }
        }
    }

    if classified.actions.is_empty() && classified.targets.is_empty() {
        return Err(PkgdevError::usage_error("no actions or targets given"));
    }
    Ok(classified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn targets(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_interleaved_arguments() {
        let classified =
            classify_arguments(&["numpy", "update", "scipy", "clean", "update"]).unwrap();
        assert_eq!(classified.actions, vec![Action::Update, Action::Clean]);
        assert_eq!(classified.targets, targets(&["numpy", "scipy"]));
    }

    #[test]
    fn test_partition_covers_deduplicated_input() {
        let args = ["pull", "numpy", "numpy", "install", "acct:repo", "pull"];
        let classified = classify_arguments(&args).unwrap();

        let mut union: BTreeSet<String> = classified
            .actions
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        for target in &classified.targets {
            assert!(Action::from_name(target).is_none());
            union.insert(target.clone());
        }
        let input: BTreeSet<String> = args.iter().map(|s| s.to_string()).collect();
        assert_eq!(union, input);
    }

    #[test]
    fn test_trailing_separators_are_stripped() {
        let classified = classify_arguments(&["numpy/", "update//"]).unwrap();
        assert_eq!(classified.actions, vec![Action::Update]);
        assert_eq!(classified.targets, targets(&["numpy"]));
    }

    #[test]
    fn test_actions_only_leaves_targets_empty() {
        let classified = classify_arguments(&["update"]).unwrap();
        assert!(classified.targets.is_empty());
        assert!(classified.has_action(Action::Update));
        assert!(!classified.has_action(Action::Clone));
    }

    #[test]
    fn test_no_arguments_is_usage_error() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            classify_arguments(&empty),
            Err(PkgdevError::UsageError { .. })
        ));
        assert!(matches!(
            classify_arguments(&["/"]),
            Err(PkgdevError::UsageError { .. })
        ));
    }
}
