//! File system helpers: copy/move with explicit destination policy, atomic
//! writes, path manipulation, persisted MRU lists, and ZIP archive access.

pub mod archive;
pub mod atomic;
pub mod mru;
pub mod ops;
pub mod paths;

pub use atomic::{write_atomic, write_atomic_json, write_atomic_string};
pub use mru::MruList;
pub use ops::{
    copy_file, ensure_dir, move_file, remove_file_if_exists, OverwritePolicy, Transfer,
};
