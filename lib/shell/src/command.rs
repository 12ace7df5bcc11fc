// Command grammar for the interactive shell
use crate::{Result, ShellError};
use regex::{Regex, RegexBuilder};
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddNode(String),
    RemoveNode(String),
    AddEdge { src: String, dest: String, weight: i64 },
    RemoveEdge { src: String, dest: String },
    Export(PathBuf),
    Help,
    Quit,
}

struct Grammar {
    vertex: Regex,
    remove_vertex: Regex,
    remove_edge: Regex,
    edge: Regex,
    graphviz: Regex,
    help: Regex,
    quit: Regex,
}

fn pattern(source: &str) -> Regex {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .expect("Built-in command pattern must compile")
}

fn grammar() -> &'static Grammar {
    static GRAMMAR: OnceLock<Grammar> = OnceLock::new();
    GRAMMAR.get_or_init(|| Grammar {
        vertex: pattern(r"^\s*(?:v|vx|vertex)\s+(\w+)\s*$"),
        remove_vertex: pattern(r"^\s*(?:r|remove)\s+(\w+)\s*$"),
        remove_edge: pattern(r"^\s*(?:r|remove)\s+(\w+)\s*->\s*(\w+)\s*$"),
        edge: pattern(r"^\s*(?:e|edge)\s+(\w+)\s*->\s*(\w+)\s+([0-9]+)\s*$"),
        graphviz: pattern(r"^\s*(?:g|graphviz)\s+([^\s\\?%*][^\\?%*]*?)\s*$"),
        help: pattern(r"^\s*(?:h|help)\s*$"),
        quit: pattern(r"^\s*(?:q|quit|exit)\s*$"),
    })
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self> {
        let g = grammar();

        if g.quit.is_match(line) {
            return Ok(Command::Quit);
        }
        if g.help.is_match(line) {
            return Ok(Command::Help);
        }
        if let Some(caps) = g.vertex.captures(line) {
            return Ok(Command::AddNode(caps[1].to_string()));
        }
        if let Some(caps) = g.remove_vertex.captures(line) {
            return Ok(Command::RemoveNode(caps[1].to_string()));
        }
        if let Some(caps) = g.remove_edge.captures(line) {
            return Ok(Command::RemoveEdge {
                src: caps[1].to_string(),
                dest: caps[2].to_string(),
            });
        }
        if let Some(caps) = g.edge.captures(line) {
            let weight = caps[3]
                .parse::<i64>()
                .map_err(|_| ShellError::InvalidWeight(caps[3].to_string()))?;
            return Ok(Command::AddEdge {
                src: caps[1].to_string(),
                dest: caps[2].to_string(),
                weight,
            });
        }
        if let Some(caps) = g.graphviz.captures(line) {
            return Ok(Command::Export(PathBuf::from(&caps[1])));
        }

        Err(ShellError::InvalidCommand(line.to_string()))
    }
}

pub const HELP: &str = "\
v|vx|vertex x          : Create vertex X
r|remove x             : Remove vertex X
r|remove x->y          : Remove edge from X to Y
e|edge x->y w          : Create edge from X to Y with weight W
g|graphviz <filename>  : Save Graphviz model to file
h|help                 : Show this help
q|quit|exit            : Quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_aliases() {
        for line in ["v a", "vx a", "VERTEX a", "  vertex   a  "] {
            assert_eq!(Command::parse(line).unwrap(), Command::AddNode("a".to_string()));
        }
    }

    #[test]
    fn test_remove_node_vs_edge() {
        assert_eq!(
            Command::parse("r x").unwrap(),
            Command::RemoveNode("x".to_string())
        );
        assert_eq!(
            Command::parse("remove x -> y").unwrap(),
            Command::RemoveEdge { src: "x".to_string(), dest: "y".to_string() }
        );
        assert_eq!(
            Command::parse("R x->y").unwrap(),
            Command::RemoveEdge { src: "x".to_string(), dest: "y".to_string() }
        );
    }

    #[test]
    fn test_edge() {
        assert_eq!(
            Command::parse("e a->b 12").unwrap(),
            Command::AddEdge { src: "a".to_string(), dest: "b".to_string(), weight: 12 }
        );
        assert!(matches!(
            Command::parse("edge a->b"),
            Err(ShellError::InvalidCommand(_))
        ));
        assert!(matches!(
            Command::parse("edge a->b -3"),
            Err(ShellError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_weight_must_be_ascii_digits() {
        assert!(matches!(
            Command::parse("e a->b \u{0663}"),
            Err(ShellError::InvalidCommand(_))
        ));
        assert!(matches!(
            Command::parse("e a->b 1\u{0663}"),
            Err(ShellError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_weight_overflow() {
        assert!(matches!(
            Command::parse("e a->b 99999999999999999999999"),
            Err(ShellError::InvalidWeight(_))
        ));
    }

    #[test]
    fn test_export_path() {
        assert_eq!(
            Command::parse("g out/graph.gv  ").unwrap(),
            Command::Export(PathBuf::from("out/graph.gv"))
        );
        assert_eq!(
            Command::parse("graphviz my graph.gv").unwrap(),
            Command::Export(PathBuf::from("my graph.gv"))
        );
        assert!(Command::parse("g bad*name").is_err());
        assert!(Command::parse("g").is_err());
        assert!(matches!(
            Command::parse("g  "),
            Err(ShellError::InvalidCommand(_))
        ));
        assert!(matches!(
            Command::parse("graphviz \t "),
            Err(ShellError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_quit_and_help() {
        for line in ["q", "QUIT", " exit "] {
            assert_eq!(Command::parse(line).unwrap(), Command::Quit);
        }
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
    }

    #[test]
    fn test_garbage() {
        for line in ["", "hello world", "v", "v a b", "e a b 1"] {
            assert!(matches!(
                Command::parse(line),
                Err(ShellError::InvalidCommand(_))
            ));
        }
    }
}
