#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};

use lazy_static::lazy_static;
use log::info;
use thiserror::Error;

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read, Write};

use searcher::algorithm::score::Evaluate;
use searcher::graph::{GraphProblem, Waypoint};
use searcher::{
    AStar, Algorithm, BreadthFirst, DepthFirst, Greedy, SearchOptions, SearchResult, Solution,
    UniformCost,
};

pub mod input;

use input::Description;

type Error = anyhow::Error;
type Runner = for<'a, 'g> fn(
    &'a GraphProblem<'g, String>,
    SearchOptions,
) -> SearchResult<Solution<Waypoint<'g, String>>>;

fn run<'a, 'g, E>(
    problem: &'a GraphProblem<'g, String>,
    options: SearchOptions,
) -> SearchResult<Solution<Waypoint<'g, String>>>
where
    E: Default + for<'x> Evaluate<Waypoint<'x, String>>,
{
    Algorithm::new(E::default())
        .with_options(options)
        .search(problem)
}

lazy_static! {
    static ref STRATEGIES: HashMap<&'static str, Runner> = {
        let mut s: HashMap<&'static str, Runner> = HashMap::new();
        s.insert("bfs", run::<BreadthFirst>);
        s.insert("dfs", run::<DepthFirst>);
        s.insert("ucs", run::<UniformCost>);
        s.insert("dijkstra", run::<UniformCost>);
        s.insert("greedy", run::<Greedy>);
        s.insert("astar", run::<AStar>);
        s
    };
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Unknown strategy {0:?}, expected one of {1}")]
    UnknownStrategy(String, String),

    #[error("No start node given, use --start or a `start` line")]
    NoStart,

    #[error("Start node {0:?} is not in the graph")]
    StartNotFound(String),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),
}

fn strategy_names() -> String {
    let mut names: Vec<&str> = STRATEGIES.keys().copied().collect();
    names.sort_unstable();
    names.join(", ")
}

fn arguments<'a, 'b>() -> App<'a, 'b> {
    App::new("graphsearch")
        .version("0.1")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find paths through weighted graphs")
        .arg(
            Arg::with_name("strategy")
                .value_name("STRATEGY")
                .help("Search strategy: bfs, dfs, ucs, greedy or astar")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("Graph description, or - for stdin")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .value_name("NODE")
                .help("Start node, overriding the input")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .long("goal")
                .value_name("NODE")
                .help("Additional goal node")
                .multiple(true)
                .number_of_values(1)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("progress")
                .long("progress")
                .value_name("N")
                .help("Log progress every N expansions")
                .takes_value(true),
        )
}

type BoxedRead = Box<dyn Read + 'static>;

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        None | Some("-") => Box::new(io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| DriverError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

/// Run a search described by command line `matches`, writing the
/// solution to `output`. Returns whether a solution was found.
pub fn search<W: Write>(
    matches: &ArgMatches,
    mut reader: BoxedRead,
    output: &mut W,
) -> Result<bool, Error> {
    let name = matches.value_of("strategy").unwrap_or_default();
    let runner = STRATEGIES
        .get(name)
        .ok_or_else(|| DriverError::UnknownStrategy(name.to_string(), strategy_names()))?;

    let options = SearchOptions {
        progress: if matches.is_present("progress") {
            Some(value_t!(matches, "progress", usize)?)
        } else {
            None
        },
    };

    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut description: Description = text.parse()?;

    if let Some(goals) = matches.values_of("goal") {
        for goal in goals {
            description.graph.mark_goal(goal.to_string());
        }
    }

    let start = matches
        .value_of("start")
        .map(str::to_string)
        .or_else(|| description.start.clone())
        .ok_or(DriverError::NoStart)?;
    if !description.graph.contains_node(&start) {
        return Err(DriverError::StartNotFound(start).into());
    }

    info!("Running {} from {}", name, start);
    let problem = description.graph.problem(start);
    let solution = runner(&problem, options)?;
    report(&solution, output)?;

    Ok(!solution.is_failure())
}

fn report<W: Write>(solution: &Solution<Waypoint<'_, String>>, output: &mut W) -> io::Result<()> {
    if solution.is_failure() {
        writeln!(output, "no solution")?;
    } else {
        let path: Vec<&str> = solution.states().iter().map(|w| w.node().as_str()).collect();
        writeln!(output, "{}", path.join(" -> "))?;
        writeln!(output, "cost {}", solution.cost())?;
        writeln!(output, "depth {}", solution.depth())?;
    }

    let stats = solution.stats();
    writeln!(
        output,
        "expanded {} generated {} discarded {} max frontier {}",
        stats.expanded, stats.generated, stats.discarded, stats.max_frontier
    )
}

/// Parse the process arguments and run the requested search.
pub fn driver() -> Result<bool, Error> {
    let matches = arguments().get_matches();
    let reader = get_input_reader(matches.value_of("input"))?;
    let stdout = io::stdout();
    let mut output = stdout.lock();
    search(&matches, reader, &mut output)
}
