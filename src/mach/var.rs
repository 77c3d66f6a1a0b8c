use super::{Val, FRAME_SLOTS, MAX_NAME_LEN};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default, Clone)]
struct Slot {
    name: String,
    val: Val,
}

/// ## Variable memory
///
/// One call frame worth of variables. A fixed number of slots,
/// searched front to back. A slot holding `Val::Undefined` is free.

#[derive(Debug, Clone)]
pub struct Var {
    slots: [Slot; FRAME_SLOTS],
}

impl Default for Var {
    fn default() -> Var {
        Var {
            slots: Default::default(),
        }
    }
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.val.is_defined()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn position(&self, var_name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.val.is_defined() && s.name == var_name)
    }

    pub fn fetch(&self, var_name: &str) -> Option<&Val> {
        self.position(var_name).map(|i| &self.slots[i].val)
    }

    pub fn fetch_mut(&mut self, var_name: &str) -> Option<&mut Val> {
        match self.position(var_name) {
            Some(i) => Some(&mut self.slots[i].val),
            None => None,
        }
    }

    /// Fetch that reports a missing variable as an error.
    pub fn get(&self, var_name: &str) -> Result<&Val> {
        match self.fetch(var_name) {
            Some(val) => Ok(val),
            None => Err(error!(UndefinedVariable; var_name)),
        }
    }

    pub fn get_integer(&self, var_name: &str) -> Result<i64> {
        match self.get(var_name)? {
            Val::Integer(n) => Ok(*n),
            val => Err(error!(TypeMismatch;
                &format!("{} IS {}", var_name, val.type_name()))),
        }
    }

    /// Creates a new variable. The name must be free in this frame.
    pub fn define(&mut self, var_name: &str, value: Val) -> Result<()> {
        if self.position(var_name).is_some() {
            return Err(error!(DuplicateDefinition; var_name));
        }
        let index = self.free_slot(var_name)?;
        self.insert(index, var_name, value);
        Ok(())
    }

    /// Overwrites an existing variable, or creates it when missing.
    pub fn store(&mut self, var_name: &str, value: Val) -> Result<()> {
        match self.fetch_mut(var_name) {
            Some(val) => {
                *val = value;
                Ok(())
            }
            None => {
                let index = self.free_slot(var_name)?;
                self.insert(index, var_name, value);
                Ok(())
            }
        }
    }

    fn free_slot(&self, var_name: &str) -> Result<usize> {
        if var_name.len() > MAX_NAME_LEN {
            return Err(error!(NameTooLong; var_name));
        }
        match self.slots.iter().position(|s| !s.val.is_defined()) {
            Some(i) => Ok(i),
            None => Err(error!(TooManyVariables)),
        }
    }

    fn insert(&mut self, index: usize, var_name: &str, value: Val) {
        debug_assert!(value.is_defined());
        let slot = &mut self.slots[index];
        slot.name.clear();
        slot.name.push_str(var_name);
        slot.val = value;
    }
}
