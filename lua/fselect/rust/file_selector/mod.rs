// Selection state and the filesystem work that feeds it

pub mod expander;
pub mod loader;
pub mod scanner;
pub mod store;

pub use expander::DirectoryExpander;
pub use loader::export_contents;
pub use scanner::{FileSystemStat, LocalFs, RecursiveFileLister};
pub use store::SelectionStore;
