use super::ast::*;
use super::error::*;
use super::lex::*;
use super::parse::*;
use super::LineNumber;

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    words: Vec<String>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        Line {
            number: None,
            words: lex(s),
        }
    }

    /// A line that will be placed at `number` in a script.
    pub fn numbered(number: usize, s: &str) -> Line {
        Line {
            number: Some(number),
            words: lex(s),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn instruction(&self) -> Result<Instruction, Error> {
        parse(self.number, &self.words)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}
