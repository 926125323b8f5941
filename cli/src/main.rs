mod command;

use anyhow::bail;
use command::Command;
use std::{io, ops::ControlFlow};
use treeval_engine::{
    search::{self, Algorithm, NodeUpdate, RunOptions},
    snapshot::TreeSnapshot,
    tree::{self, Edge, Node, TreeConfig},
    values,
};

fn main() {
    let mut app = App::new();
    println!("treeval {} — type 'help' for commands", env!("CARGO_PKG_VERSION"));
    for line in io::stdin().lines() {
        let cmd = match line.expect("failed to read from stdin").parse() {
            Ok(cmd) => cmd,
            Err(error) => {
                eprintln!("error: {}", error);
                continue;
            }
        };
        match app.run(cmd) {
            Ok(ControlFlow::Continue(_)) => continue,
            Ok(ControlFlow::Break(_)) => break,
            Err(err) => eprintln!("error: {}", err),
        }
    }
}

struct App {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    depth: u32,
}

impl App {
    fn new() -> App {
        App {
            nodes: Vec::new(),
            edges: Vec::new(),
            depth: 0,
        }
    }

    fn run(&mut self, command: Command) -> anyhow::Result<ControlFlow<(), ()>> {
        match command {
            Command::Build {
                depth,
                widths,
                leaves,
            } => {
                self.build(depth, widths, &leaves)?;
            }
            Command::Connect { source, target } => {
                self.connect(&source, &target)?;
            }
            Command::Disconnect { source, target } => {
                self.disconnect(&source, &target)?;
            }
            Command::Autowire => {
                let count = self.autowire()?;
                println!("wired {} edges", count);
            }
            Command::Set { id, value } => {
                self.set_leaf(&id, &value)?;
            }
            Command::Run(algorithm) => {
                self.evaluate(algorithm)?;
            }
            Command::Show { json } => {
                self.show(json)?;
            }
            Command::Clear => {
                for node in &mut self.nodes {
                    node.clear_annotations();
                }
                println!("annotations cleared");
            }
            Command::Reset => {
                self.nodes.clear();
                self.edges.clear();
                self.depth = 0;
                println!("tree discarded");
            }
            Command::Help => {
                self.help();
            }
            Command::Quit => {
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn build(&mut self, depth: u32, widths: Vec<usize>, leaves: &str) -> anyhow::Result<()> {
        let config = TreeConfig {
            depth,
            widths,
            leaf_values: TreeConfig::parse_leaves(leaves)?,
        };
        self.nodes = tree::build(&config)?;
        self.edges.clear();
        self.depth = depth;
        println!(
            "built {} nodes ({} leaves, depth {}); author edges with 'connect' or 'autowire'",
            self.nodes.len(),
            config.leaf_values.len(),
            depth
        );
        Ok(())
    }

    fn node(&self, id: &str) -> anyhow::Result<&Node> {
        match self.nodes.iter().find(|n| n.id.as_str() == id) {
            Some(node) => Ok(node),
            None => bail!("unknown node id '{}'", id),
        }
    }

    fn connect(&mut self, source: &str, target: &str) -> anyhow::Result<()> {
        self.node(source)?;
        self.node(target)?;
        let edge = Edge::new(source, target);
        if self.edges.contains(&edge) {
            bail!("edge {} -> {} already exists", source, target);
        }
        self.edges.push(edge);
        println!("{} -> {}", source, target);
        Ok(())
    }

    fn disconnect(&mut self, source: &str, target: &str) -> anyhow::Result<()> {
        let edge = Edge::new(source, target);
        let before = self.edges.len();
        self.edges.retain(|e| *e != edge);
        if self.edges.len() == before {
            bail!("no edge {} -> {}", source, target);
        }
        Ok(())
    }

    /// Distributes each level's nodes evenly over the level above, replacing
    /// the whole edge set. Stands in for dragging every connection by hand.
    fn autowire(&mut self) -> anyhow::Result<usize> {
        if self.nodes.is_empty() {
            bail!("no tree; run 'build' first");
        }

        let mut rows: Vec<f64> = self.nodes.iter().map(|n| n.position.y).collect();
        rows.sort_by(f64::total_cmp);
        rows.dedup();

        let mut edges = Vec::new();
        for pair in rows.windows(2) {
            let parents: Vec<&Node> = self
                .nodes
                .iter()
                .filter(|n| n.position.y == pair[0])
                .collect();
            let children: Vec<&Node> = self
                .nodes
                .iter()
                .filter(|n| n.position.y == pair[1])
                .collect();
            for (i, child) in children.iter().enumerate() {
                let parent = &parents[i * parents.len() / children.len()];
                edges.push(Edge {
                    source: parent.id.clone(),
                    target: child.id.clone(),
                });
            }
        }

        self.edges = edges;
        Ok(self.edges.len())
    }

    fn set_leaf(&mut self, id: &str, value: &str) -> anyhow::Result<()> {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id.as_str() == id) else {
            bail!("unknown node id '{}'", id);
        };
        if !node.is_leaf() {
            bail!("'{}' is not a leaf node", id);
        }
        node.set_static_value(value);
        Ok(())
    }

    fn evaluate(&mut self, algorithm: Algorithm) -> anyhow::Result<()> {
        let mut options = RunOptions::default();
        options.set_on_update(App::show_update);

        let report = search::run(
            &mut self.nodes,
            &self.edges,
            self.depth,
            algorithm,
            options,
        )?;

        println!(
            "{}: root value {} ({} updates, {} pruned)",
            report.algorithm,
            values::display_number(report.root_value),
            report.updates_published,
            report.nodes_pruned,
        );
        Ok(())
    }

    fn show_update(update: &NodeUpdate) {
        if update.pruned {
            println!("info {} pruned", update.id);
            return;
        }
        print!(
            "info {} = {}",
            update.id,
            update.value.as_deref().unwrap_or(values::UNSET_LABEL)
        );
        if let (Some(alpha), Some(beta)) = (&update.alpha, &update.beta) {
            print!(" [α {}, β {}]", alpha, beta);
        }
        println!();
    }

    fn show(&self, json: bool) -> anyhow::Result<()> {
        let snapshot = TreeSnapshot::capture(&self.nodes);
        if json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            return Ok(());
        }

        for node in &snapshot.nodes {
            print!("{:<10} {:<5} {:>8}", node.id, node.kind, node.value);
            if let (Some(alpha), Some(beta)) = (&node.alpha, &node.beta) {
                print!("  α {} β {}", alpha, beta);
            }
            if node.pruned {
                print!("  (pruned)");
            }
            println!();
        }
        for edge in &self.edges {
            println!("{} -> {}", edge.source, edge.target);
        }
        Ok(())
    }

    fn help(&self) {
        println!("build depth <n> [widths <a,b,..>] leaves <v1,v2,..>");
        println!("connect <source> <target> | disconnect <source> <target>");
        println!("autowire                  rebuild all edges level by level");
        println!("set <leaf-id> <value>     overwrite a leaf value");
        println!("run [minimax|alphabeta]   evaluate the tree (default minimax)");
        println!("show [json]               print the current node state");
        println!("clear                     reset values/bounds/pruning marks");
        println!("reset                     discard the tree and edges");
        println!("quit");
    }
}
