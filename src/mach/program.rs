use super::{Address, MAX_INSTRUCTIONS};
use crate::error;
use crate::lang::{ast::Instruction, Error, Line};

type Result<T> = std::result::Result<T, Error>;

/// ## A complete script
///
/// Declared with its instruction count up front, then filled one line
/// at a time. Only a complete program may be run.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    expected: usize,
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instruction_count: usize) -> Result<Program> {
        if instruction_count > MAX_INSTRUCTIONS {
            return Err(error!(IllegalNumberOfLines;
                &format!("MAXIMUM IS {}", MAX_INSTRUCTIONS)));
        }
        Ok(Program {
            expected: instruction_count,
            instructions: Vec::with_capacity(instruction_count),
        })
    }

    /// Reads exactly `instruction_count` lines. The first bad line,
    /// or running out of lines, fails the whole program.
    pub fn from_lines<'a, T: IntoIterator<Item = &'a str>>(
        instruction_count: usize,
        lines: T,
    ) -> Result<Program> {
        let mut program = Program::new(instruction_count)?;
        for line in lines.into_iter().take(instruction_count) {
            program.push_line(line)?;
        }
        if !program.is_complete() {
            return Err(error!(SyntaxError, Some(program.len()); "UNEXPECTED END OF SCRIPT"));
        }
        Ok(program)
    }

    pub fn push_line(&mut self, s: &str) -> Result<()> {
        let line = Line::numbered(self.instructions.len(), s);
        let instruction = line.instruction()?;
        self.push(instruction)
    }

    pub fn push(&mut self, instruction: Instruction) -> Result<()> {
        if self.is_complete() {
            return Err(error!(IllegalNumberOfLines, Some(self.instructions.len())));
        }
        self.instructions.push(instruction);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.instructions.len() == self.expected
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, addr: Address) -> Option<&Instruction> {
        self.instructions.get(addr)
    }

    /// Address of the first `label` with this name.
    pub fn find_label(&self, label: &str) -> Option<Address> {
        self.instructions
            .iter()
            .position(|i| i.label_name() == Some(label))
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{}", instruction)?;
        }
        Ok(())
    }
}
