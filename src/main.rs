use std::io;
use std::process;

use clap::{App, Arg, ArgGroup, ArgMatches};
use separator::Separatable;

use sokoban_search::config::{Format, Heuristic, Strategy};
use sokoban_search::level::Level;
use sokoban_search::play::play;
use sokoban_search::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .author("martin-t")
        .version("0.1")
        .about("Solves sokoban levels using uninformed or heuristic search")
        .arg(
            Arg::with_name("bfs")
                .short("b")
                .long("bfs")
                .help("breadth-first search"),
        ).arg(
            Arg::with_name("ucs")
                .short("u")
                .long("ucs")
                .help("uniform-cost search"),
        ).arg(
            Arg::with_name("astar")
                .short("a")
                .long("astar")
                .help("A* search (default)"),
        ).group(ArgGroup::with_name("strategy").args(&["bfs", "ucs", "astar"]))
        .arg(
            Arg::with_name("heuristic")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&Heuristic::NAMES)
                .help("overrides the strategy's default estimator"),
        ).arg(
            Arg::with_name("plain")
                .short("p")
                .long("plain")
                .help("parse as the plain format (B, T, P, b, p)"),
        ).arg(
            Arg::with_name("xsb")
                .short("x")
                .long("xsb")
                .help("parse as XSB format (detected from the contents if neither is given)"),
        ).group(ArgGroup::with_name("format").args(&["plain", "xsb"]))
        .arg(
            Arg::with_name("render")
                .short("r")
                .long("render")
                .help("print the board after every move of the solution"),
        ).arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print status while searching"),
        ).arg(
            Arg::with_name("play")
                .long("play")
                .conflicts_with_all(&["bfs", "ucs", "astar", "heuristic", "render", "quiet"])
                .help("play the level using commands from stdin"),
        ).arg(Arg::with_name("file").required(true))
        .get_matches();

    let path = value_or_exit(&matches, "file");
    let format = if matches.is_present("plain") {
        Some(Format::Plain)
    } else if matches.is_present("xsb") {
        Some(Format::Xsb)
    } else {
        None
    };
    let level = match format {
        Some(format) => path.load_level_as(format),
        None => path.load_level(),
    };
    let level = level.unwrap_or_else(|err| {
        eprintln!("Can't load level {}: {}", path, err);
        process::exit(1);
    });
    let render_format = format.unwrap_or(Format::Plain);

    if matches.is_present("play") {
        run_play(&level, render_format);
        return;
    }

    let strategy = if matches.is_present("bfs") {
        Strategy::Bfs
    } else if matches.is_present("ucs") {
        Strategy::Ucs
    } else {
        Strategy::AStar
    };
    let heuristic = match matches.value_of("heuristic") {
        Some(name) => name.parse().unwrap_or_else(|err: String| {
            eprintln!("{}", err);
            process::exit(1);
        }),
        None => strategy.default_heuristic(),
    };
    let quiet = matches.is_present("quiet");

    if !quiet {
        println!("Solving {} using {} ({})...", path, strategy, heuristic);
    }
    let solver_ok = level.solve_with(strategy, heuristic, !quiet);
    println!("{}", solver_ok.stats);

    match solver_ok.moves {
        Some(ref moves) => {
            if matches.is_present("render") {
                print!("{}", level.solution(moves, true, render_format));
            }
            println!("Solution: {}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        None => println!("No solution"),
    }
    println!("Explored: {}", solver_ok.explored().separated_string());
    println!("Frontier: {}", solver_ok.frontier_size().separated_string());
    let elapsed = solver_ok.elapsed;
    let millis = elapsed.as_secs() * 1000 + u64::from(elapsed.subsec_millis());
    println!("Elapsed: {} ms", millis.separated_string());
}

fn value_or_exit<'a>(matches: &'a ArgMatches<'_>, name: &str) -> &'a str {
    matches.value_of(name).unwrap_or_else(|| {
        eprintln!("Missing argument: {}", name);
        process::exit(1);
    })
}

fn run_play(level: &Level, format: Format) {
    println!("Moves: u, d, l, r (several per line). Commands: reset, quit.");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let res = play(level, format, stdin.lock(), stdout.lock());
    if let Err(err) = res {
        eprintln!("Failed to play: {}", err);
        process::exit(1);
    }
}
