use super::ast::Instruction;
use super::*;


fn parse_str(s: &str) -> Result<Instruction, Error> {
    Line::numbered(0, s).instruction()
}
