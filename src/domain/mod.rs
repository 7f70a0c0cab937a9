/// Domain layer: projects, the registry, the workspace and the action table
pub mod entities;
pub mod value_objects;
