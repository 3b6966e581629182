//! `fptrie` binary: builds the FP-tree of a transaction file, prints the
//! node audit listing and the F-list, and saves text and graph renderings.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use fptrie::fp::export::{flist_summary, node_report, write_dot, write_text, DotRenderer};
use fptrie::fp::{build_from_path, Alphabet, BuildConfig, CountSemantics, DEFAULT_MIN_SUPPORT};
use fptrie::ExportError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SEPARATOR: &str = "-----------------------------------------";

#[derive(Parser, Debug)]
#[command(name = "fptrie", version, about = "Build an FP-tree from a transaction file")]
struct Args {
    /// Transaction file, one whitespace separated transaction per line
    #[arg(short, long, default_value = "records.txt", env = "FPTRIE_INPUT")]
    input: PathBuf,

    /// Items occurring fewer times than this are left out of the tree
    #[arg(short = 's', long, default_value_t = DEFAULT_MIN_SUPPORT, env = "FPTRIE_MIN_SUPPORT")]
    min_support: usize,

    /// How repeated items within one transaction are counted
    #[arg(long, value_enum, default_value_t = Semantics::Multiset)]
    semantics: Semantics,

    /// Recognised items, in tie-break order (default: 0-9)
    #[arg(long, value_delimiter = ',', conflicts_with = "open")]
    alphabet: Option<Vec<String>>,

    /// Accept every token as an item
    #[arg(long)]
    open: bool,

    /// Where to save the indented text rendering
    #[arg(long, default_value = "fp-tree-ascii-graph.txt")]
    ascii_out: PathBuf,

    /// Where to save the Graphviz source, if wanted
    #[arg(long)]
    dot_out: Option<PathBuf>,

    /// Where to save the rendered graph
    #[arg(long, default_value = "fp-tree-visual-graph.png")]
    png_out: PathBuf,

    /// Skip the PNG rendering
    #[arg(long)]
    no_png: bool,

    /// Graphviz executable used for the PNG
    #[arg(long, default_value = "dot")]
    dot_program: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Semantics {
    Multiset,
    Set,
}

impl From<Semantics> for CountSemantics {
    fn from(semantics: Semantics) -> Self {
        match semantics {
            Semantics::Multiset => CountSemantics::Multiset,
            Semantics::Set => CountSemantics::Set,
        }
    }
}

impl Args {
    fn build_config(&self) -> BuildConfig<String> {
        let alphabet = if self.open {
            Alphabet::Open
        } else {
            match &self.alphabet {
                Some(items) => Alphabet::closed(items.iter().cloned()),
                None => Alphabet::digits(),
            }
        };

        BuildConfig::new(alphabet)
            .with_min_support(self.min_support)
            .with_semantics(self.semantics.into())
    }
}

/// Export failures are reported and do not stop the remaining exports.
fn report_export(what: &str, path: &Path, result: Result<(), ExportError>) -> bool {
    match result {
        Ok(()) => {
            println!("{SEPARATOR}\n{what} saved in {}", path.display());
            true
        }
        Err(err) => {
            warn!(error = %err, path = %path.display(), "export failed");
            eprintln!("{SEPARATOR}\nCould not save {what}: {err}");
            false
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fptrie=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = args.build_config();

    info!(input = %args.input.display(), min_support = config.min_support, "building fp-tree");

    let built = build_from_path(&args.input, &config)
        .with_context(|| format!("failed to build fp-tree from {}", args.input.display()))?;

    print!("{}", node_report(&built.trie));

    let mut exports_ok = report_export(
        "Tree",
        &args.ascii_out,
        write_text(&built.trie, &args.ascii_out),
    );

    if let Some(dot_out) = &args.dot_out {
        exports_ok &= report_export("Graph source", dot_out, write_dot(&built.trie, dot_out));
    }

    if !args.no_png {
        let renderer = DotRenderer::new(args.dot_program.clone());
        exports_ok &= report_export(
            "Tree graph",
            &args.png_out,
            renderer.render_png(&built.trie, &args.png_out),
        );
    }

    println!("{SEPARATOR}");
    println!(
        "Items frequent list (ordered) (MIN_SUP={}):\n{}",
        config.min_support,
        flist_summary(&built.f_list)
    );

    if !exports_ok {
        anyhow::bail!("one or more exports failed");
    }
    Ok(())
}
