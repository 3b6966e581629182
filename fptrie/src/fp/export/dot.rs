use crate::error::ExportError;
use crate::fp::tree::{FpTrie, NodeId};
use crate::fp::Item;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Undirected Graphviz graph of the trie. Node ids come from the arena, so
/// nodes with equal labels on different paths stay separate.
pub fn render_dot<I: Item>(trie: &FpTrie<I>) -> String {
    let mut nodes = String::new();
    let mut edges = String::new();
    let mut stack = vec![NodeId::ROOT];

    while let Some(id) = stack.pop() {
        let Some(node) = trie.node(id) else { continue };

        let label = format!("'{}': {}\\n({})", node.name(), node.count, node.path);
        nodes.push_str(&format!(
            "    \"n{}\" [shape=box, label=\"{}\"];\n",
            id.index(),
            escape(&label)
        ));
        if let Some(parent) = node.parent {
            edges.push_str(&format!("    \"n{}\" -- \"n{}\";\n", parent.index(), id.index()));
        }

        stack.extend(trie.children(id).iter().rev());
    }

    format!("graph tree {{\n{nodes}{edges}}}\n")
}

// Quotes only; `\n` in labels is a Graphviz line break and stays as is.
fn escape(label: &str) -> String {
    label.replace('"', "\\\"")
}

pub fn write_dot<I: Item>(trie: &FpTrie<I>, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    fs::write(path, render_dot(trie)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Rasterises DOT output through an external Graphviz binary.
#[derive(Debug, Clone)]
pub struct DotRenderer {
    program: String,
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new("dot")
    }
}

impl DotRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Writes a PNG of the trie to `path`.
    pub fn render_png<I: Item>(&self, trie: &FpTrie<I>, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let io_error = |source: io::Error| ExportError::Io {
            path: PathBuf::from(path),
            source,
        };

        let mut child = Command::new(&self.program)
            .arg("-Tpng")
            .arg("-o")
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => ExportError::RendererMissing {
                    program: self.program.clone(),
                },
                _ => io_error(err),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(render_dot(trie).as_bytes())
                .map_err(io_error)?;
        }

        let output = child.wait_with_output().map_err(io_error)?;
        if !output.status.success() {
            return Err(ExportError::RendererFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(path = %path.display(), "png written");
        Ok(())
    }
}
