use super::{ast::*, token::*, Error, LineNumber, MAX_OPERANDS};

type Result<T> = std::result::Result<T, Error>;

pub fn parse(line_number: LineNumber, words: &[String]) -> Result<Instruction> {
    match Parser::parse(words) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

struct Parser<'a> {
    mnemonic: Mnemonic,
    operands: std::slice::Iter<'a, String>,
}

impl<'a> Parser<'a> {
    fn parse(words: &'a [String]) -> Result<Instruction> {
        let (first, operands) = match words.split_first() {
            Some(split) => split,
            None => return Err(error!(SyntaxError; "EMPTY LINE")),
        };
        if operands.len() > MAX_OPERANDS {
            return Err(error!(SyntaxError; "TOO MANY OPERANDS"));
        }
        let mnemonic = match Mnemonic::from_string(first) {
            Some(m) => m,
            None => return Err(error!(UnknownInstruction; first)),
        };
        if operands.len() != mnemonic.arity() {
            return Err(error!(WrongNumberOfOperands;
                &format!("{} TAKES {}", mnemonic, mnemonic.arity())));
        }
        let mut parse = Parser {
            mnemonic,
            operands: operands.iter(),
        };
        let instruction = parse.instruction()?;
        debug_assert!(parse.operands.next().is_none());
        Ok(instruction)
    }

    fn operand(&mut self) -> Result<String> {
        match self.operands.next() {
            Some(s) => Ok(s.clone()),
            None => Err(error!(InternalError; "OPERAND UNDERFLOW")),
        }
    }

    fn instruction(&mut self) -> Result<Instruction> {
        use Mnemonic::*;
        Ok(match self.mnemonic {
            Nop => Instruction::Nop,
            Label => Instruction::Label(self.operand()?),
            Call => Instruction::Call(self.operand()?),
            Ret => Instruction::Ret,
            Jmp => Instruction::Jmp(self.operand()?),
            Cbz => Instruction::Cbz(self.operand()?, self.operand()?),
            Def => Instruction::Def(self.operand()?, self.operand()?),
            Mov => Instruction::Mov(self.operand()?, self.operand()?),
            Print => Instruction::Print(self.operand()?),
            Add => Instruction::Add(self.operand()?, self.operand()?, self.operand()?),
            Sub => Instruction::Sub(self.operand()?, self.operand()?, self.operand()?),
            Load => Instruction::Load(self.operand()?, self.operand()?),
            Store => Instruction::Store(self.operand()?, self.operand()?),
        })
    }
}
