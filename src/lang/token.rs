/// ## Instruction catalog
///
/// Every instruction a script line may begin with.
/// Lookup is case-insensitive; `Display` renders the canonical lower case.

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Mnemonic {
    Nop,
    Label,
    Call,
    Ret,
    Jmp,
    Cbz,
    Def,
    Mov,
    Print,
    Add,
    Sub,
    Load,
    Store,
}

impl Mnemonic {
    pub const ALL: [Mnemonic; 13] = [
        Mnemonic::Nop,
        Mnemonic::Label,
        Mnemonic::Call,
        Mnemonic::Ret,
        Mnemonic::Jmp,
        Mnemonic::Cbz,
        Mnemonic::Def,
        Mnemonic::Mov,
        Mnemonic::Print,
        Mnemonic::Add,
        Mnemonic::Sub,
        Mnemonic::Load,
        Mnemonic::Store,
    ];

    pub fn from_string(s: &str) -> Option<Mnemonic> {
        Mnemonic::ALL
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .copied()
    }

    pub fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Nop => "nop",
            Label => "label",
            Call => "call",
            Ret => "ret",
            Jmp => "jmp",
            Cbz => "cbz",
            Def => "def",
            Mov => "mov",
            Print => "print",
            Add => "add",
            Sub => "sub",
            Load => "load",
            Store => "store",
        }
    }

    /// Exact number of operands the instruction takes.
    pub fn arity(self) -> usize {
        use Mnemonic::*;
        match self {
            Nop | Ret => 0,
            Label | Call | Jmp | Print => 1,
            Cbz | Def | Mov | Load | Store => 2,
            Add | Sub => 3,
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(Mnemonic::from_string("cbz"), Some(Mnemonic::Cbz));
        assert_eq!(Mnemonic::from_string("CBZ"), Some(Mnemonic::Cbz));
        assert_eq!(Mnemonic::from_string("StOrE"), Some(Mnemonic::Store));
        assert_eq!(Mnemonic::from_string("PICKLES"), None);
        assert_eq!(Mnemonic::from_string("cb"), None);
        assert_eq!(Mnemonic::from_string(""), None);
    }

    #[test]
    fn test_catalog_is_complete() {
        for m in Mnemonic::ALL.iter() {
            assert_eq!(Mnemonic::from_string(&m.to_string()), Some(*m));
            assert!(m.arity() <= 3);
        }
    }
}
