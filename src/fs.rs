use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::Format;
use crate::level::Level;
use crate::parser;
use crate::LoadLevel;

impl<P: AsRef<Path>> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let text = read_file(self)?;
        Ok(parser::parse(&text)?)
    }

    fn load_level_as(&self, format: Format) -> Result<Level, Box<dyn Error>> {
        let text = read_file(self)?;
        Ok(parser::parse_format(&text, format)?)
    }
}

fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let path = path.as_ref();
    debug!("Reading {}", path.display());
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;

    #[test]
    fn loading() {
        let plain = "levels/01-simplest.txt".load_level().unwrap();
        let xsb = "levels/01-simplest-xsb.txt".load_level().unwrap();
        assert_eq!(plain.map, xsb.map);
        assert_eq!(plain.state.boxes(), xsb.state.boxes());
        assert_eq!(xsb.state.player_pos(), Pos::new(1, 1));

        let forced = Path::new("levels/01-simplest.txt")
            .load_level_as(Format::Plain)
            .unwrap();
        assert_eq!(forced.map, plain.map);
    }

    #[test]
    fn wrong_format() {
        let err = "levels/01-simplest.txt"
            .load_level_as(Format::Xsb)
            .unwrap_err();
        assert!(err.to_string().contains("[1, 1]"), "{}", err);
    }
}
