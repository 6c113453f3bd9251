#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};
use itertools::Itertools;
use thiserror::Error;

use std::fs::File;
use std::io::{self, Read};

pub mod logger;
pub mod maze;
pub mod pathfinder;

use maze::MazeProblem;
use pathfinder::Pathfinder;
use searcher::SearchOptions;

type Error = anyhow::Error;

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("keymaze")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find the cheapest route through a maze, collecting a key on the way to a goal")
        .arg(
            Arg::with_name("maze")
                .value_name("MAZE")
                .help("Maze to solve, or - to read from stdin")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("N")
                .help("Give up after expanding this many states in either search")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("trace")
                .short("t")
                .long("trace")
                .help("Draw the route on the maze"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log search progress (repeat for more detail)"),
        )
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();

    logger::init(matches.occurrences_of("verbose"))?;

    let options = search_options(&matches)?;
    let maze = read_maze(get_input_reader(matches.value_of("maze"))?)?;

    let pathfinder = Pathfinder::new(&maze).with_options(options);
    match pathfinder.attempt()? {
        Ok(route) => {
            println!("Route: {}", route.actions().iter().join(","));
            println!("Cost: {}", route.cost());
            println!("Key: {}", route.key());
            println!("Goal: {}", route.goal());

            if matches.is_present("trace") {
                let path = maze.replay(route.actions())?;
                print!("{}", maze.render(&path));
            }
        }
        Err(reason) => println!("No solution: {}", reason),
    }

    Ok(())
}

fn search_options(matches: &ArgMatches) -> Result<SearchOptions, Error> {
    if matches.is_present("limit") {
        Ok(SearchOptions::with_limit(value_t!(matches, "limit", usize)?))
    } else {
        Ok(SearchOptions::default())
    }
}

type BoxedRead = Box<dyn Read + 'static>;

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, CliError> {
    let reader: BoxedRead = match filename {
        None | Some("-") => Box::new(io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| CliError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

pub fn read_maze(mut input: BoxedRead) -> Result<MazeProblem, Error> {
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    Ok(buf.parse()?)
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arguments() {
        let matches = app()
            .get_matches_from_safe(vec!["keymaze", "-vv", "--limit", "40", "maze.txt"])
            .unwrap();

        assert_eq!(matches.value_of("maze"), Some("maze.txt"));
        assert_eq!(matches.occurrences_of("verbose"), 2);
        assert!(!matches.is_present("trace"));
        assert_eq!(
            search_options(&matches).unwrap(),
            SearchOptions::with_limit(40)
        );
    }

    #[test]
    fn bad_limit() {
        let matches = app()
            .get_matches_from_safe(vec!["keymaze", "--limit", "lots", "maze.txt"])
            .unwrap();
        assert!(search_options(&matches).is_err());
    }

    #[test]
    fn missing_input() {
        let err = get_input_reader(Some("mazes/does-not-exist.txt"))
            .err()
            .unwrap();
        assert!(matches!(err, CliError::InputNotFound(ref p, _) if p.ends_with("does-not-exist.txt")));
    }

    #[test]
    fn read() {
        let reader: BoxedRead = Box::new(io::Cursor::new(include_str!("../mazes/open.txt")));
        let maze = read_maze(reader).unwrap();
        assert_eq!(maze.key_states().len(), 1);

        let reader: BoxedRead = Box::new(io::Cursor::new("I.?"));
        assert!(read_maze(reader).is_err());
    }
}
