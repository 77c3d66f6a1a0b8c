#![allow(dead_code)]
use regscript::mach::{Event, Program, Runtime};

pub fn runtime(lines: &[&str]) -> Runtime {
    let program = Program::from_lines(lines.len(), lines.iter().copied()).unwrap();
    Runtime::new(program)
}

pub fn script(lines: &[&str]) -> String {
    exec(&mut runtime(lines))
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    if let Err(error) = runtime.call("main") {
        return format!("{}\n", error);
    }
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
        }
        prev_running = event == Event::Running;
    }
    s
}
