use crate::{common::*, direction::Direction};

/// Asks for a direction on a numbered menu.
///
/// Unlike [Direction::from_str], this never rejects a choice: anything that
/// is not the number of a listed option selects the default direction.
/// Only I/O failures are reported.
pub fn select_direction<R, W>(mut input: R, mut output: W) -> io::Result<Direction>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Please select the merge direction from the options:")?;
    Direction::ALL
        .iter()
        .enumerate()
        .try_for_each(|(index, direction)| writeln!(output, "{}. {}", index + 1, direction))?;
    write!(output, "Enter your choice (number): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let selected = line
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| Direction::ALL.get(index).copied());

    let direction = match selected {
        Some(direction) => direction,
        None => {
            let default = Direction::default();
            warn!("invalid direction selection {:?}", line.trim());
            writeln!(
                output,
                "Invalid selection, using default direction '{}'.",
                default
            )?;
            default
        }
    };

    Ok(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(text: &str) -> (Direction, String) {
        let mut output = vec![];
        let direction = select_direction(text.as_bytes(), &mut output).unwrap();
        (direction, String::from_utf8(output).unwrap())
    }

    #[test]
    fn numbered_choices() {
        assert_eq!(select("1\n").0, Direction::Horizontal);
        assert_eq!(select("2\n").0, Direction::Vertical);
        assert_eq!(select("  2  \n").0, Direction::Vertical);
    }

    #[test]
    fn menu_lists_options() {
        let (_, text) = select("1\n");
        assert_eq!(
            text,
            "Please select the merge direction from the options:\n\
             1. horizontal\n\
             2. vertical\n\
             Enter your choice (number): "
        );
    }

    #[test]
    fn invalid_choices_fall_back_to_horizontal() {
        ["0\n", "3\n", "-1\n", "abc\n", "vertical\n", "\n", ""]
            .into_iter()
            .for_each(|text| {
                let (direction, output) = select(text);
                assert_eq!(direction, Direction::Horizontal, "input {:?}", text);
                assert!(output.ends_with("Invalid selection, using default direction 'horizontal'.\n"));
            });
    }
}
