#![allow(clippy::module_inception)]

use std::{fs, path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

pub mod analyzer;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod semantic;
pub mod symbol_table;

extern crate regex;

/// A source location: the 1-based line and the name of the file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn line(&self) -> u32 {
        self.0
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_source_line(file: &Path, line: u32) -> Result<String, Error> {
    let content = fs::read_to_string(file).map_err(|err| {
        Error::new(
            ErrorImpl::Io {
                path: file.to_string_lossy().into_owned(),
                message: err.to_string(),
            },
            Position(line, Rc::new(file.to_string_lossy().into_owned())),
        )
    })?;

    let index = (line as usize).saturating_sub(1);
    Ok(content
        .lines()
        .nth(index)
        .map(String::from)
        .unwrap_or_default())
}


pub fn display_error(error: &Error, file: &Path) {
    /*
        Error: UnexpectedToken (Expected `.`, found `EOF`)
        -> prog.txt
           |
        20 | end
           | ^^^
    */

    let line = error.get_position().line();

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file.as_os_str().to_string_lossy());

    let line_text = match get_source_line(file, line) {
        Ok(text) if line > 0 => text,
        _ => {
            eprintln!("{}", error);
            return;
        }
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, _) = remove_starting_whitespace(&line_text);
    let trimmed = line_text_removed.trim_end();
    eprintln!("{} | {}", line_string, trimmed);

    let carets = "^".repeat(trimmed.chars().count().max(1));
    eprintln!("{:>padding$} {}", "|", carets);
    eprintln!("{}", error);
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
