use super::token::Mnemonic;

/// ## A parsed script line
///
/// Each variant owns the operand text it was parsed from.
/// Names are kept verbatim; they are only checked when executed.

#[derive(Debug, PartialEq, Clone)]
pub enum Instruction {
    Nop,
    Label(String),
    Call(String),
    Ret,
    Jmp(String),
    /// Variable, label.
    Cbz(String, String),
    /// Variable, literal.
    Def(String, String),
    /// Destination, source.
    Mov(String, String),
    Print(String),
    /// Destination, lhs, rhs.
    Add(String, String, String),
    /// Destination, lhs, rhs.
    Sub(String, String, String),
    /// Destination variable, source register.
    Load(String, String),
    /// Destination register, source variable.
    Store(String, String),
}

impl Instruction {
    pub fn mnemonic(&self) -> Mnemonic {
        use Instruction::*;
        match self {
            Nop => Mnemonic::Nop,
            Label(_) => Mnemonic::Label,
            Call(_) => Mnemonic::Call,
            Ret => Mnemonic::Ret,
            Jmp(_) => Mnemonic::Jmp,
            Cbz(..) => Mnemonic::Cbz,
            Def(..) => Mnemonic::Def,
            Mov(..) => Mnemonic::Mov,
            Print(_) => Mnemonic::Print,
            Add(..) => Mnemonic::Add,
            Sub(..) => Mnemonic::Sub,
            Load(..) => Mnemonic::Load,
            Store(..) => Mnemonic::Store,
        }
    }

    pub fn operands(&self) -> Vec<&str> {
        use Instruction::*;
        match self {
            Nop | Ret => vec![],
            Label(a) | Call(a) | Jmp(a) | Print(a) => vec![a],
            Cbz(a, b) | Def(a, b) | Mov(a, b) | Load(a, b) | Store(a, b) => vec![a, b],
            Add(a, b, c) | Sub(a, b, c) => vec![a, b, c],
        }
    }

    /// The label name when this is a `label` marker.
    pub fn label_name(&self) -> Option<&str> {
        match self {
            Instruction::Label(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())?;
        for operand in self.operands() {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}
