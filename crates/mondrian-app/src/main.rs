// ABOUTME: Main application entry point.
// ABOUTME: Runs the interactive command loop and repaints the canvas after mutations.

mod canvas;

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use anyhow::Result;

use canvas::TextCanvas;
use mondrian_core::{Color, Config, Palette};
use mondrian_tree::{walk, PartitionTree, RegionId, SplitAxis};

const HELP: &str = "\
commands:
  split <id> h|v    split the leaf <id> horizontally or vertically
  remove <id>       remove the region <id>; its sibling takes over the space
  show              repaint the canvas
  list              list leaves with tints and removability
  help              show this help
  quit              exit";

/// One parsed user action
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Split(RegionId, SplitAxis),
    Remove(RegionId),
    Show,
    List,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Command, String> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or("empty command")?;
        let command = match verb {
            "split" => {
                let id = tokens.next().ok_or("usage: split <id> h|v")?;
                let axis = match tokens.next().ok_or("usage: split <id> h|v")? {
                    "h" | "horizontal" => SplitAxis::Horizontal,
                    "v" | "vertical" => SplitAxis::Vertical,
                    other => return Err(format!("unknown axis '{other}' (expected h or v)")),
                };
                Command::Split(RegionId::new(id), axis)
            }
            "remove" | "rm" => {
                let id = tokens.next().ok_or("usage: remove <id>")?;
                Command::Remove(RegionId::new(id))
            }
            "show" | "render" => Command::Show,
            "list" | "ls" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("unknown command '{other}' (try 'help')")),
        };
        if let Some(extra) = tokens.next() {
            return Err(format!("unexpected argument '{extra}'"));
        }
        Ok(command)
    }
}

struct App {
    config: Config,
    tree: PartitionTree,
    /// Presentational tint per region, assigned at creation time
    tints: HashMap<RegionId, Color>,
    palette: Palette,
}

impl App {
    fn new(config: Config) -> Self {
        let mut palette = Palette::new(config.palette.clone());
        let mut tints = HashMap::new();
        tints.insert(RegionId::root(), palette.next_color());
        Self {
            config,
            tree: PartitionTree::new(),
            tints,
            palette,
        }
    }

    /// Returns false when the session should end
    fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Split(target, axis) => {
                if self.split_region(&target, axis) && self.config.behavior.render_after_mutation {
                    println!("{}", self.render());
                }
            }
            Command::Remove(target) => {
                if self.remove_region(&target) && self.config.behavior.render_after_mutation {
                    println!("{}", self.render());
                }
            }
            Command::Show => println!("{}", self.render()),
            Command::List => print!("{}", self.list()),
            Command::Help => println!("{HELP}"),
            Command::Quit => return false,
        }
        true
    }

    fn split_region(&mut self, target: &RegionId, axis: SplitAxis) -> bool {
        match self.tree.split(target, axis) {
            Some((first, second)) => {
                // The first child keeps the split cell's tint, the second
                // gets the next one from the palette
                let inherited = self.tints.get(target).copied().unwrap_or_default();
                self.tints.insert(first, inherited);
                self.tints.insert(second, self.palette.next_color());
                tracing::info!(
                    "Split {} {}, total regions: {}",
                    target,
                    axis.label(),
                    self.tree.region_count()
                );
                true
            }
            None => {
                println!("cannot split '{target}': no such leaf");
                tracing::warn!("Rejected split of {}", target);
                false
            }
        }
    }

    fn remove_region(&mut self, target: &RegionId) -> bool {
        let snapshot = self.tree.snapshot();
        if snapshot.find(target).is_none() {
            println!("cannot remove '{target}': no such region");
            tracing::warn!("Rejected removal of {}", target);
            return false;
        }
        let parent_id = snapshot.find_parent(target).map(|p| p.id().clone());
        if !self.tree.should_show_remove(target, parent_id.as_ref()) {
            println!("cannot remove '{target}': it is the only region");
            tracing::warn!("Rejected removal of {}", target);
            return false;
        }
        if !self.tree.remove(target) {
            // A split root passes the visibility gate but stays protected
            println!("cannot remove '{target}': the root cannot be removed");
            tracing::warn!("Rejected removal of {}", target);
            return false;
        }
        let snapshot = self.tree.snapshot();
        self.tints.retain(|id, _| snapshot.find(id).is_some());
        tracing::info!(
            "Removed {}, remaining regions: {}",
            target,
            self.tree.region_count()
        );
        true
    }

    fn render(&self) -> String {
        let mut canvas = TextCanvas::new(
            self.config.canvas.cols as usize,
            self.config.canvas.rows as usize,
            self.config.behavior.show_region_ids,
            self.config.behavior.show_remove_markers,
        );
        walk(&self.tree.snapshot(), &mut canvas);
        canvas.into_string()
    }

    fn list(&self) -> String {
        let snapshot = self.tree.snapshot();
        let mut out = String::new();
        for leaf in snapshot.leaves() {
            let parent_id = snapshot.find_parent(&leaf).map(|p| p.id().clone());
            let removable = snapshot.should_show_remove(&leaf, parent_id.as_ref());
            let tint = self.tints.get(&leaf).copied().unwrap_or_default();
            out.push_str(&format!(
                "{}  {}  {}\n",
                leaf,
                tint.to_hex(),
                if removable { "removable" } else { "fixed" }
            ));
        }
        out.push_str(&format!("{} regions\n", self.tree.region_count()));
        out
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting mondrian");

    let config = Config::load_or_default();
    let mut app = App::new(config);

    println!("{}", app.render());
    println!("{HELP}");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Command::parse(trimmed) {
            Ok(command) => {
                if !app.handle(command) {
                    break;
                }
            }
            Err(message) => println!("{message}"),
        }
    }

    tracing::info!("Exiting mondrian");
    Ok(())
}
