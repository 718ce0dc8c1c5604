use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flat_tree::{Direction, FlatNode};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flat-tree", about = "Flat-tree index arithmetic for append-only Merkle logs")]
struct Cli {
    /// Log every computation at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Depth of an index (0 for leaves).
    Depth { index: u64 },
    /// Offset of an index among nodes of its depth.
    Offset {
        index: u64,
        /// Known depth of the index (0 derives it).
        #[arg(long, default_value_t = 0)]
        depth: u32,
    },
    /// Flat index of the node at (depth, offset).
    Index { depth: u32, offset: u64 },
    /// Parent of an index.
    Parent { index: u64 },
    /// Sibling of an index.
    Sibling { index: u64 },
    /// Sibling of the parent of an index.
    Uncle { index: u64 },
    /// Left and right children of an internal node.
    Children {
        index: u64,
        /// Known depth of the index (0 derives it).
        #[arg(long, default_value_t = 0)]
        depth: u32,
    },
    /// Inclusive range of leaves under an index.
    Spans {
        index: u64,
        /// Known depth of the index (0 derives it).
        #[arg(long, default_value_t = 0)]
        depth: u32,
    },
    /// Number of indices in the subtree rooted at an index.
    Count {
        index: u64,
        /// Known depth of the index (0 derives it).
        #[arg(long, default_value_t = 0)]
        depth: u32,
    },
    /// Roots of the complete subtrees covering [0, boundary).
    FullRoots {
        /// Leaf-aligned (even) boundary.
        boundary: u64,
    },
    /// Every coordinate of an index at once.
    Describe { index: u64 },
    /// Left/right steps leading from a root down to a target.
    Path { root: u64, target: u64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!(command = ?cli.command, "running");
    let output = run(cli.command)?;
    println!("{}", output);

    Ok(())
}

fn init_tracing(verbose: bool) {
    // Default: warn globally, info for this crate. RUST_LOG overrides.
    let fallback = if verbose {
        "warn,flat_tree=debug"
    } else {
        "warn,flat_tree=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

fn run(command: Commands) -> Result<String> {
    if let Some(index) = command.index() {
        anyhow::ensure!(
            index < u64::MAX,
            "index {} has depth 64 and no representable subtree",
            index
        );
        if let Some(hint) = command.depth_hint() {
            let actual = flat_tree::depth(index);
            anyhow::ensure!(
                hint == 0 || hint == actual,
                "depth hint {} does not match index {} (depth {})",
                hint,
                index,
                actual
            );
        }
    }

    let output = match command {
        Commands::Depth { index } => flat_tree::depth(index).to_string(),
        Commands::Offset { index, depth } => flat_tree::offset_with_depth(index, depth).to_string(),
        Commands::Index { depth, offset } => flat_tree::checked_index(depth, offset)
            .with_context(|| format!("node at depth {} offset {} does not fit in u64", depth, offset))?
            .to_string(),
        Commands::Parent { index } => flat_tree::checked_parent(index)
            .with_context(|| format!("parent of {} does not fit in u64", index))?
            .to_string(),
        Commands::Sibling { index } => flat_tree::checked_sibling(index)
            .with_context(|| format!("sibling of {} does not fit in u64", index))?
            .to_string(),
        Commands::Uncle { index } => flat_tree::checked_uncle(index)
            .with_context(|| format!("uncle of {} does not fit in u64", index))?
            .to_string(),
        Commands::Children { index, depth } => {
            let (left, right) = flat_tree::children_with_depth(index, depth)
                .with_context(|| format!("no children for index {}", index))?;
            format!("{} {}", left, right)
        }
        Commands::Spans { index, depth } => {
            let (left, right) = flat_tree::spans_with_depth(index, depth);
            format!("{} {}", left, right)
        }
        Commands::Count { index, depth } => flat_tree::count_with_depth(index, depth).to_string(),
        Commands::FullRoots { boundary } => {
            let roots = flat_tree::full_roots(boundary)
                .with_context(|| format!("cannot compute full roots below {}", boundary))?;
            info!(boundary, roots = roots.len(), "computed full roots");
            join(&roots)
        }
        Commands::Describe { index } => describe(index)?,
        Commands::Path { root, target } => {
            let path = flat_tree::path_to(root, target).with_context(|| {
                format!("index {} is outside the subtree rooted at {}", target, root)
            })?;
            info!(root, target, steps = path.len(), "resolved path");
            path.iter()
                .map(|step| match step {
                    Direction::Left => "L",
                    Direction::Right => "R",
                })
                .collect::<Vec<_>>()
                .join(" ")
        }
    };

    Ok(output)
}

impl Commands {
    /// The node index this command operates on, if any
    fn index(&self) -> Option<u64> {
        match self {
            Commands::Depth { index }
            | Commands::Offset { index, .. }
            | Commands::Parent { index }
            | Commands::Sibling { index }
            | Commands::Uncle { index }
            | Commands::Children { index, .. }
            | Commands::Spans { index, .. }
            | Commands::Count { index, .. }
            | Commands::Describe { index } => Some(*index),
            Commands::Path { root, .. } => Some(*root),
            Commands::Index { .. } | Commands::FullRoots { .. } => None,
        }
    }

    /// Caller-supplied depth, where the command accepts one
    fn depth_hint(&self) -> Option<u32> {
        match self {
            Commands::Offset { depth, .. }
            | Commands::Children { depth, .. }
            | Commands::Spans { depth, .. }
            | Commands::Count { depth, .. } => Some(*depth),
            _ => None,
        }
    }
}

fn describe(index: u64) -> Result<String> {
    let node = FlatNode::new(index);
    let (left, right) = node.spans();
    let children = match node.children() {
        Ok((l, r)) => format!("{} {}", l.index(), r.index()),
        Err(_) => "-".to_string(),
    };

    let parent = flat_tree::checked_parent(index)
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    let sibling = flat_tree::checked_sibling(index)
        .map_or_else(|| "-".to_string(), |s| s.to_string());

    Ok(format!(
        "node\t{}\nparent\t{}\nsibling\t{}\nchildren\t{}\nspans\t{} {}\ncount\t{}",
        node,
        parent,
        sibling,
        children,
        left,
        right,
        node.count()
    ))
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
