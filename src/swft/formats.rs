//! Output formats for parsed programs
//!
//!     Every format implements [Formatter] and is looked up by name in a [FormatRegistry].
//!     The built in formats are:
//!
//!         treeviz     one line per node, box drawing connectors and an icon per node type
//!         tag         XML-like nesting, one tag per node type
//!         json        the serde form of the program
//!         yaml        the serde form of the program
//!
//!     Python output is not a format: it goes through code generation, which can fail on
//!     undeclared names.

pub mod registry;
pub mod serde_formats;
pub mod tag;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use tag::{to_tag_str, TagFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
