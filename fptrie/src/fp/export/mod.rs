//! Renderings of a finished trie. None of them mutate it, and a failed
//! export leaves the trie ready for the next one.

mod dot;
mod report;
mod text;

pub use dot::{render_dot, write_dot, DotRenderer};
pub use report::{flist_summary, node_records, node_report, NodeRecord};
pub use text::{render_text, write_text};
