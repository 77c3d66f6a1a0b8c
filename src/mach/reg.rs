use super::REGISTER_COUNT;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Register file
///
/// Integer cells named `$0` through `$9`. One register file lives as
/// long as the `Runtime` and is shared by every call frame.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Reg {
    regs: [i64; REGISTER_COUNT],
}

impl Reg {
    pub fn new() -> Reg {
        Reg::default()
    }

    /// Decodes a register name into its index. No side effects on failure.
    pub fn index(reg_name: &str) -> Result<usize> {
        let mut chars = reg_name.chars();
        let digit = match (chars.next(), chars.next(), chars.next()) {
            (Some('$'), Some(ch), None) => ch.to_digit(10),
            _ => None,
        };
        match digit {
            Some(d) if (d as usize) < REGISTER_COUNT => Ok(d as usize),
            _ => Err(error!(IllegalRegister; reg_name)),
        }
    }

    pub fn fetch(&self, reg_name: &str) -> Result<i64> {
        Ok(self.regs[Reg::index(reg_name)?])
    }

    pub fn store(&mut self, reg_name: &str, value: i64) -> Result<()> {
        self.regs[Reg::index(reg_name)?] = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_index() {
        assert_eq!(Reg::index("$0"), Ok(0));
        assert_eq!(Reg::index("$9"), Ok(9));
        for name in ["$", "$10", "3", "$a", "r1", "$-1", "", "$٣"].iter() {
            let e = Reg::index(name).unwrap_err();
            assert!(e.is(ErrorCode::IllegalRegister), "{}", name);
        }
    }

    #[test]
    fn test_store_fetch() {
        let mut reg = Reg::new();
        assert_eq!(reg.fetch("$4"), Ok(0));
        reg.store("$4", -7).unwrap();
        assert_eq!(reg.fetch("$4"), Ok(-7));
        assert!(reg.store("$x", 1).is_err());
        assert_eq!(reg, {
            let mut expected = Reg::new();
            expected.store("$4", -7).unwrap();
            expected
        });
    }
}
