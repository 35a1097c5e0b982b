//! CRB Tool Common Library
//!
//! レジストリ・ディスパッチャ・CLIで共有されるスロットの型とユーティリティ

pub mod asset;
pub mod document;
pub mod error;
pub mod mode;
pub mod naming;
pub mod outcome;
pub mod panel;
pub mod slot;

pub use asset::{AssetKind, SCRIPT_EXTENSIONS, SUPPORTED_EXTENSIONS};
pub use document::SlotDocument;
pub use error::{Error, Result};
pub use mode::ExecutionMode;
pub use naming::{display_name, file_stem};
pub use outcome::{Notice, ScriptOutcome, ScriptStatus, Severity};
pub use panel::{PanelState, SlotState};
pub use slot::{DirectorySlot, SlotKind, SlotView, ACTION_CAPACITY, DIRECTORY_CAPACITY};
