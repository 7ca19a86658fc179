pub mod canonical;
pub mod helpers;
pub mod layout;
pub mod naming;
pub mod structs;
pub mod typedefs;
pub mod verify;

// Re-export main public functions
pub use canonical::CanonicalNaming;
pub use layout::{LayoutLeaf, LayoutPath, LeafKind, layout_leaves};
pub use naming::{CppNaming, Naming, ScopedCppNaming, mangle};
pub use structs::{RecordOptions, emit_struct};
pub use typedefs::emit_typedef;
pub use verify::emit_layout_assertions;
