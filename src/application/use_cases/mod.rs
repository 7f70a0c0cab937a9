pub mod classify_arguments;
pub mod dispatch_actions;
pub mod resolve_targets;

pub use classify_arguments::{classify_arguments, ClassifiedArguments};
pub use dispatch_actions::{DispatchActionsUseCase, DispatchReport, ExecutedOperation};
pub use resolve_targets::{resolve_targets, validate_targets, ResolvedTargets, ALL_TARGET};
