mod directory;

pub use directory::{DirectoryAction, apply_actions, directory_panel};
