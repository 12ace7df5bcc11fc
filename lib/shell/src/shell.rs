use crate::command::{Command, HELP};
use crate::export::save_dot;
use crate::{Result, ShellError, ShellConfig};
use sparsegraph_core::Graph;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// What the caller should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    ShowHelp,
    Quit,
}

/// An interactive session over one graph
pub struct Shell {
    config: ShellConfig,
    graph: Graph<String, i64>,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            graph: Graph::new(),
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph<String, i64> {
        &self.graph
    }

    /// Parse and run a single line. Blank lines do nothing.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let command = Command::parse(line)?;
        debug!(?command, "dispatch");
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::AddNode(key) => {
                self.graph.add_node(key)?;
            }
            Command::RemoveNode(key) => {
                self.graph.remove_node(&key)?;
            }
            Command::AddEdge { src, dest, weight } => {
                self.graph.add_edge(&src, &dest, weight)?;
            }
            Command::RemoveEdge { src, dest } => {
                self.graph.remove_edge(&src, &dest)?;
            }
            Command::Export(path) => {
                save_dot(&self.graph, &path)?;
            }
            Command::Help => return Ok(Flow::ShowHelp),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    pub fn banner(&self) -> String {
        format!("Interactive Graph\n\n{}\n\nHave fun!\n", HELP)
    }

    /// Read lines from `input` until quit or end of input. Failed commands
    /// are reported on `err` as `Err: <message>` and the loop goes on.
    /// Lines that are not valid UTF-8 count as invalid commands; only a
    /// failed read ends the session early.
    pub fn run<R, O, E>(&mut self, mut input: R, out: &mut O, err: &mut E) -> Result<()>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        info!("session started");
        if self.config.show_banner {
            writeln!(out, "{}", self.banner())?;
        }

        let mut buf = Vec::new();
        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(out)?;
                break;
            }
            match decode_line(&buf).and_then(|line| self.execute(line)) {
                Ok(Flow::Quit) => break,
                Ok(Flow::ShowHelp) => writeln!(out, "{}", HELP)?,
                Ok(Flow::Continue) => {}
                Err(e) => report(err, &e)?,
            }
        }

        info!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "session ended"
        );
        Ok(())
    }
}

/// Strip the line terminator and decode as UTF-8
fn decode_line(raw: &[u8]) -> Result<&str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw)
        .map_err(|_| ShellError::InvalidCommand(String::from_utf8_lossy(raw).into_owned()))
}

/// Print a per-command failure without ending the session
pub fn report<E: Write>(err: &mut E, error: &ShellError) -> Result<()> {
    warn!(%error, "command failed");
    writeln!(err, "Err: {}", error)?;
    Ok(())
}
