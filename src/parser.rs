use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::Format;
use crate::data::{MapCell, Pos};
use crate::level::Level;
use crate::map::MapModel;
use crate::state::PuzzleState;
use crate::vec2d::Vec2d;

/// The level text can't be turned into a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    RowLength(usize),
    MultiplePlayers,
    NoPlayer,
    BoxesTargets { boxes: usize, targets: usize },
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::RowLength(r) => write!(f, "Mismatch in row length on row {}", r),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::BoxesTargets { boxes, targets } => write!(
                f,
                "Number of boxes ({}) does not match number of targets ({})",
                boxes, targets
            ),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Detects the format: anything containing an XSB-only symbol is XSB.
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    if level.contains(|c: char| "$.@*+".contains(c)) {
        parse_format(level, Format::Xsb)
    } else {
        parse_format(level, Format::Plain)
    }
}

pub(crate) fn parse_format(level: &str, format: Format) -> Result<Level, ParserErr> {
    let mut parsed = Parsed::default();
    match format {
        Format::Plain => parse_plain(level, &mut parsed)?,
        Format::Xsb => parse_xsb(level, &mut parsed)?,
    }

    let player_pos = parsed.player_pos.ok_or(ParserErr::NoPlayer)?;
    if parsed.boxes.len() != parsed.targets.len() {
        return Err(ParserErr::BoxesTargets {
            boxes: parsed.boxes.len(),
            targets: parsed.targets.len(),
        });
    }

    let map = MapModel::new(Vec2d::new(&parsed.grid), parsed.targets);
    let state = PuzzleState::initial(&map, parsed.boxes, player_pos);
    debug!(
        "Parsed {:?} level with {} boxes",
        format,
        state.boxes().len()
    );
    Ok(Level::new(map, state))
}

#[derive(Default)]
struct Parsed {
    grid: Vec<Vec<MapCell>>,
    targets: Vec<Pos>,
    boxes: Vec<Pos>,
    player_pos: Option<Pos>,
}

impl Parsed {
    fn set_player(&mut self, pos: Pos) -> Result<(), ParserErr> {
        if self.player_pos.is_some() {
            return Err(ParserErr::MultiplePlayers);
        }
        self.player_pos = Some(pos);
        Ok(())
    }
}

/// `#` obstacle, `B` box, `T` target, `P` player, `b` box on target,
/// `p` player on target, space is free.
///
/// Blank lines are skipped and the rest trimmed, all rows must be equally long.
fn parse_plain(level: &str, parsed: &mut Parsed) -> Result<(), ParserErr> {
    let rows = level
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let mut row_len = None;
    for (r, line) in rows.enumerate() {
        let len = line.chars().count();
        if *row_len.get_or_insert(len) != len {
            return Err(ParserErr::RowLength(r));
        }

        let mut row = Vec::with_capacity(len);
        for (c, cur_char) in line.chars().enumerate() {
            let pos = Pos::new(r as i32, c as i32);
            let cell = match cur_char {
                '#' => MapCell::Obstacle,
                ' ' => MapCell::Empty,
                'B' => {
                    parsed.boxes.push(pos);
                    MapCell::Empty
                }
                'T' => {
                    parsed.targets.push(pos);
                    MapCell::Target
                }
                'P' => {
                    parsed.set_player(pos)?;
                    MapCell::Empty
                }
                'b' => {
                    parsed.boxes.push(pos);
                    parsed.targets.push(pos);
                    MapCell::Target
                }
                'p' => {
                    parsed.set_player(pos)?;
                    parsed.targets.push(pos);
                    MapCell::Target
                }
                _ => return Err(ParserErr::Pos(r, c)),
            };
            row.push(cell);
        }
        parsed.grid.push(row);
    }
    Ok(())
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
fn parse_xsb(level: &str, parsed: &mut Parsed) -> Result<(), ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    for (r, line) in level.lines().enumerate() {
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let pos = Pos::new(r as i32, c as i32);
            let cell = match cur_char {
                '#' => MapCell::Obstacle,
                '@' => {
                    parsed.set_player(pos)?;
                    MapCell::Empty
                }
                '+' => {
                    parsed.set_player(pos)?;
                    parsed.targets.push(pos);
                    MapCell::Target
                }
                '$' => {
                    parsed.boxes.push(pos);
                    MapCell::Empty
                }
                '*' => {
                    parsed.boxes.push(pos);
                    parsed.targets.push(pos);
                    MapCell::Target
                }
                '.' => {
                    parsed.targets.push(pos);
                    MapCell::Target
                }
                ' ' | '-' | '_' => MapCell::Empty,
                _ => return Err(ParserErr::Pos(r, c)),
            };
            row.push(cell);
        }
        parsed.grid.push(row);
    }
    Ok(())
}
