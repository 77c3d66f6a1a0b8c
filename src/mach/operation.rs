use super::{Val, MAX_STRING_LEN};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    /// Integers wrap. Strings concatenate and must fit in `MAX_STRING_LEN`.
    pub fn sum(lhs: &Val, rhs: &Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_add(*r))),
            (String(l), String(r)) => {
                if l.len() + r.len() > MAX_STRING_LEN {
                    return Err(error!(StringTooLong;
                        &format!("MAXIMUM STRING LENGTH IS {}", MAX_STRING_LEN)));
                }
                Ok(String(format!("{}{}", l, r)))
            }
            _ => Err(Operation::mismatch(lhs, rhs)),
        }
    }

    /// Integers wrap. Strings lose `rhs` from their end when it is a suffix.
    pub fn subtract(lhs: &Val, rhs: &Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_sub(*r))),
            (String(l), String(r)) => match l.strip_suffix(r.as_str()) {
                Some(s) => Ok(String(s.to_string())),
                None => Ok(String(l.clone())),
            },
            _ => Err(Operation::mismatch(lhs, rhs)),
        }
    }

    fn mismatch(lhs: &Val, rhs: &Val) -> Error {
        error!(TypeMismatch; &format!("{} AND {}", lhs.type_name(), rhs.type_name()))
    }
}
