//! Text descriptions of weighted graphs.
//!
//! One directive per line; `#` starts a comment.
//!
//! ```text
//! A -> B 3     # directed edge costing 3
//! B -- C 1     # edges both ways
//! h A 4        # heuristic estimate for A
//! start A
//! goal C       # may be repeated
//! ```

use std::num::ParseIntError;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use thiserror::Error;

use searcher::graph::Graph;

/// Error when parsing a graph description.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Line {line}: unrecognized directive {text:?}")]
    Syntax { line: usize, text: String },

    #[error("Line {line}: invalid number")]
    InvalidNumber {
        line: usize,
        #[source]
        source: ParseIntError,
    },

    #[error("Line {line}: start given twice")]
    DuplicateStart { line: usize },
}

/// A parsed graph, along with its start directive.
#[derive(Debug, Clone)]
pub struct Description {
    pub graph: Graph<String>,
    pub start: Option<String>,
    pub goals: Vec<String>,
}

impl FromStr for Description {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref EDGE: Regex =
                Regex::new(r"^(?P<from>\S+)\s*(?P<kind>->|--)\s*(?P<to>\S+)\s+(?P<cost>\d+)$")
                    .unwrap();
            static ref HEURISTIC: Regex = Regex::new(r"^h\s+(?P<node>\S+)\s+(?P<fitness>\d+)$").unwrap();
            static ref DIRECTIVE: Regex = Regex::new(r"^(?P<kind>start|goal)\s+(?P<node>\S+)$").unwrap();
        };

        let mut description = Description {
            graph: Graph::new(),
            start: None,
            goals: Vec::new(),
        };

        for (n, raw) in s.lines().enumerate() {
            let line = n + 1;
            let text = raw.split('#').next().unwrap_or("").trim();
            if text.is_empty() {
                continue;
            }

            let number = |value: &str| {
                value
                    .parse::<usize>()
                    .map_err(|source| InputError::InvalidNumber { line, source })
            };

            if let Some(cap) = EDGE.captures(text) {
                let (from, to) = (cap["from"].to_string(), cap["to"].to_string());
                let cost = number(&cap["cost"])?;
                if &cap["kind"] == "--" {
                    description.graph.connect_both(from, to, cost);
                } else {
                    description.graph.connect(from, to, cost);
                }
            } else if let Some(cap) = HEURISTIC.captures(text) {
                let fitness = number(&cap["fitness"])?;
                description.graph.set_fitness(cap["node"].to_string(), fitness);
            } else if let Some(cap) = DIRECTIVE.captures(text) {
                let node = cap["node"].to_string();
                if &cap["kind"] == "start" {
                    if description.start.is_some() {
                        return Err(InputError::DuplicateStart { line });
                    }
                    description.graph.add_node(node.clone());
                    description.start = Some(node);
                } else {
                    description.graph.mark_goal(node.clone());
                    description.goals.push(node);
                }
            } else {
                return Err(InputError::Syntax {
                    line,
                    text: text.to_string(),
                });
            }
        }

        debug!(
            "Parsed graph with {} nodes, start {:?}, goals {:?}",
            description.graph.len(),
            description.start,
            description.goals
        );
        Ok(description)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn directives() {
        let description: Description = "
            # the diamond
            A -> B 1
            A -> C 5
            B -> D 1
            C -- D 1   # both ways
            h A 2
            start A
            goal D
        "
        .parse()
        .unwrap();

        let graph = &description.graph;
        assert_eq!(graph.len(), 4);
        assert_eq!(description.start.as_deref(), Some("A"));
        assert_eq!(description.goals, vec!["D".to_string()]);

        let from_d: Vec<_> = graph.edges(&"D".to_string()).collect();
        assert_eq!(from_d, vec![(&"C".to_string(), 1)]);
    }

    #[test]
    fn sample_graph() {
        let description: Description = include_str!("../graphs/diamond.txt").parse().unwrap();
        assert_eq!(description.graph.len(), 4);
        assert_eq!(description.start.as_deref(), Some("A"));

        let problem = description.graph.problem("A".to_string());
        let solution = searcher::astar(&problem).unwrap();
        assert_eq!(solution.cost(), 2);
    }

    #[test]
    fn syntax_error_has_line() {
        let err = "A -> B 1\nA => C 2\n".parse::<Description>().unwrap_err();
        match err {
            InputError::Syntax { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "A => C 2");
            }
            other => panic!("Unexpected error {:?}", other),
        }
    }

    #[test]
    fn overflowing_cost() {
        let err = "A -> B 99999999999999999999999\n"
            .parse::<Description>()
            .unwrap_err();
        assert!(matches!(err, InputError::InvalidNumber { line: 1, .. }));
    }

    #[test]
    fn duplicate_start() {
        let err = "start A\nstart B\n".parse::<Description>().unwrap_err();
        assert!(matches!(err, InputError::DuplicateStart { line: 2 }));
    }
}
