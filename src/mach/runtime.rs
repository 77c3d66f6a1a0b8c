use super::{Address, Operation, Program, Reg, Stack, Val, Var, DEFAULT_MAX_DEPTH};
use crate::error;
use crate::lang::{ast::Instruction, Error};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Script execution
///
/// Runs a `Program` from an entry label. Every `call` saves the active
/// variable frame on an explicit stack and starts the callee with an empty
/// one; `ret` restores the caller. Registers are shared by all frames and
/// survive from one program to the next.
///
/// Execution proceeds in slices. Each call to `execute` runs until the
/// script prints, stops, fails, or uses up its cycles.

pub struct Runtime {
    program: Program,
    reg: Reg,
    vars: Var,
    stack: Stack<Frame>,
    pc: Address,
    state: State,
    print_buffer: String,
}

#[derive(Debug, PartialEq)]
pub enum Event {
    Errors(Vec<Error>),
    Print(String),
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Stopped,
    Running,
    Interrupt,
}

#[derive(Debug)]
struct Frame {
    vars: Var,
    call_site: Address,
}

/// How the instruction pointer moves after one instruction.
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Return,
    Jump(Address),
    Call(Address),
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            program: Program::default(),
            reg: Reg::default(),
            vars: Var::default(),
            stack: Stack::new("TOO MANY NESTED CALLS", DEFAULT_MAX_DEPTH),
            pc: 0,
            state: State::Stopped,
            print_buffer: String::new(),
        }
    }
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        let mut runtime = Runtime::default();
        runtime.set_program(program);
        runtime
    }

    /// Replaces the script. Registers keep their values.
    pub fn set_program(&mut self, program: Program) {
        debug!(instructions = program.len(), "program loaded");
        self.stop();
        self.program = program;
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn registers(&self) -> &Reg {
        &self.reg
    }

    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.stack.set_max_len(max_depth);
    }

    pub fn max_depth(&self) -> usize {
        self.stack.max_len()
    }

    pub fn is_running(&self) -> bool {
        self.state != State::Stopped
    }

    /// Request an interrupt. The running script fails with `BREAK`
    /// at the start of the next `execute`.
    pub fn interrupt(&mut self) {
        if self.state == State::Running {
            self.state = State::Interrupt;
        }
    }

    /// Begins running at `label` with a fresh frame. Nothing runs until `execute`.
    pub fn call(&mut self, label: &str) -> Result<()> {
        let addr = match self.program.find_label(label) {
            Some(addr) => addr,
            None => return Err(error!(UndefinedLabel; label)),
        };
        debug!(label, addr, "enter");
        self.stop();
        self.pc = addr;
        self.state = State::Running;
        Ok(())
    }

    /// Runs `label` to completion, collecting everything printed.
    pub fn run(&mut self, label: &str) -> std::result::Result<String, Vec<Error>> {
        if let Err(error) = self.call(label) {
            return Err(vec![error]);
        }
        let mut output = String::new();
        loop {
            match self.execute(usize::max_value()) {
                Event::Errors(errors) => return Err(errors),
                Event::Print(s) => output.push_str(&s),
                Event::Running => {}
                Event::Stopped => return Ok(output),
            }
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        match self.state {
            State::Stopped => return Event::Stopped,
            State::Interrupt => {
                let error = error!(Break, Some(self.pc));
                return Event::Errors(self.unwind(error));
            }
            State::Running => {}
        }
        for _ in 0..cycles {
            if let Err(errors) = self.step() {
                return Event::Errors(errors);
            }
            if !self.print_buffer.is_empty() {
                return Event::Print(std::mem::take(&mut self.print_buffer));
            }
            if self.state == State::Stopped {
                return Event::Stopped;
            }
        }
        Event::Running
    }

    fn stop(&mut self) {
        self.stack.clear();
        self.vars = Var::new();
        self.pc = 0;
        self.state = State::Stopped;
        self.print_buffer.clear();
    }

    fn step(&mut self) -> std::result::Result<(), Vec<Error>> {
        let pc = self.pc;
        if pc >= self.program.len() {
            return Err(self.unwind(error!(EndOfScript, Some(pc))));
        }
        let result = match self.program.get(pc) {
            Some(instruction) => {
                trace!(pc, %instruction, "exec");
                Runtime::exec(
                    instruction,
                    &self.program,
                    &mut self.vars,
                    &mut self.reg,
                    &mut self.print_buffer,
                )
            }
            None => Err(error!(InternalError; "NO INSTRUCTION")),
        };
        let flow = match result {
            Ok(flow) => flow,
            Err(error) => return Err(self.unwind(error.in_line_number(Some(pc)))),
        };
        match flow {
            Flow::Continue => self.pc += 1,
            Flow::Jump(addr) => self.pc = addr,
            Flow::Call(addr) => {
                let frame = Frame {
                    vars: Var::new(),
                    call_site: pc,
                };
                if let Err(error) = self.stack.push(frame) {
                    return Err(self.unwind(error.in_line_number(Some(pc))));
                }
                if let Some(frame) = self.stack.last_mut() {
                    std::mem::swap(&mut frame.vars, &mut self.vars);
                }
                debug!(pc, addr, depth = self.stack.len(), "call");
                self.pc = addr;
            }
            Flow::Return => match self.stack.pop() {
                Ok(frame) => {
                    debug!(pc, depth = self.stack.len(), "return");
                    self.vars = frame.vars;
                    self.pc = frame.call_site + 1;
                }
                Err(_) => {
                    debug!(pc, "finished");
                    self.vars = Var::new();
                    self.state = State::Stopped;
                }
            },
        }
        Ok(())
    }

    /// Abandons every active invocation. The first error is the cause;
    /// one more follows for each `call` that was waiting on it.
    fn unwind(&mut self, error: Error) -> Vec<Error> {
        debug!(%error, depth = self.stack.len(), "unwind");
        let mut errors = vec![error];
        while let Ok(frame) = self.stack.pop() {
            self.vars = frame.vars;
            let label = match self.program.get(frame.call_site) {
                Some(Instruction::Call(label)) => label.as_str(),
                _ => "",
            };
            errors.push(error!(CallFailed, Some(frame.call_site); label));
        }
        self.stop();
        errors
    }

    fn find_label(program: &Program, label: &str) -> Result<Address> {
        match program.find_label(label) {
            Some(addr) => Ok(addr),
            None => Err(error!(UndefinedLabel; label)),
        }
    }

    fn exec(
        instruction: &Instruction,
        program: &Program,
        vars: &mut Var,
        reg: &mut Reg,
        print_buffer: &mut String,
    ) -> Result<Flow> {
        use Instruction::*;
        match instruction {
            Nop => {
                print_buffer.push_str("NOP\n");
                Ok(Flow::Continue)
            }
            Label(_) => Ok(Flow::Continue),
            Call(label) => Ok(Flow::Call(Runtime::find_label(program, label)?)),
            Ret => Ok(Flow::Return),
            Jmp(label) => Ok(Flow::Jump(Runtime::find_label(program, label)?)),
            Cbz(var_name, label) => {
                let value = vars.get_integer(var_name)?;
                let addr = Runtime::find_label(program, label)?;
                if value == 0 {
                    Ok(Flow::Jump(addr))
                } else {
                    Ok(Flow::Continue)
                }
            }
            Def(var_name, literal) => {
                let value = Val::from_literal(literal)?;
                vars.define(var_name, value)?;
                Ok(Flow::Continue)
            }
            Mov(dest, src) => {
                let value = vars.get(src)?.clone();
                match vars.fetch_mut(dest) {
                    Some(val) => *val = value,
                    None => return Err(error!(UndefinedVariable; dest)),
                }
                Ok(Flow::Continue)
            }
            Print(var_name) => {
                match vars.get(var_name)? {
                    Val::Undefined => return Err(error!(InternalError; "CORRUPT VARIABLE")),
                    val => print_buffer
                        .push_str(&format!("variable: '{}', value: {}\n", var_name, val)),
                }
                Ok(Flow::Continue)
            }
            Add(dest, lhs, rhs) => {
                let value = Operation::sum(vars.get(lhs)?, vars.get(rhs)?)?;
                vars.store(dest, value)?;
                Ok(Flow::Continue)
            }
            Sub(dest, lhs, rhs) => {
                let value = Operation::subtract(vars.get(lhs)?, vars.get(rhs)?)?;
                vars.store(dest, value)?;
                Ok(Flow::Continue)
            }
            Load(dest, src) => {
                let value = reg.fetch(src)?;
                match vars.fetch_mut(dest) {
                    Some(Val::Integer(n)) => *n = value,
                    Some(val) => {
                        return Err(error!(TypeMismatch;
                            &format!("{} IS {}", dest, val.type_name())))
                    }
                    None => return Err(error!(UndefinedVariable; dest)),
                }
                Ok(Flow::Continue)
            }
            Store(dest, src) => {
                let value = vars.get_integer(src)?;
                reg.store(dest, value)?;
                Ok(Flow::Continue)
            }
        }
    }
}
