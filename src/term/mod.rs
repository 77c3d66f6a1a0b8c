extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult, Terminal};
use regscript::error;
use regscript::lang::Error;
use regscript::mach::{Event, Program, Runtime, DEFAULT_MAX_DEPTH, MAX_INSTRUCTIONS};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CYCLES_PER_SLICE: usize = 5000;

#[derive(Parser)]
#[command(name = "regscript")]
#[command(about = "Line-oriented scripting machine", long_about = None)]
struct Cli {
    /// Script file; every line is one instruction. Prompts for lines when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Label to start execution at
    #[arg(short, long, default_value = "main")]
    entry: String,

    /// Seconds before the process is killed, 0 for no limit
    #[arg(short, long, default_value_t = 60)]
    timeout: u64,

    /// Nested calls allowed before a script fails
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

pub fn main() {
    let cli = Cli::parse();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if cli.timeout > 0 {
        set_execution_timeout(Duration::from_secs(cli.timeout));
    }

    let success = match main_loop(&cli, interrupted) {
        Ok(success) => success,
        Err(error) => {
            eprintln!("{}", error);
            false
        }
    };
    std::process::exit(if success { 0 } else { 1 });
}

/// Ends the whole process once `limit` has passed, whatever it is doing.
fn set_execution_timeout(limit: Duration) {
    spawn_watchdog(limit, || {
        timeout_notice();
        std::process::exit(1);
    });
}

fn spawn_watchdog<F>(limit: Duration, on_expire: F) -> JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    std::thread::spawn(move || {
        std::thread::sleep(limit);
        on_expire();
    })
}

fn timeout_notice() {
    let _ = print_error(&mut std::io::stdout(), &error!(ExecutionTimeout));
}

fn main_loop(cli: &Cli, interrupted: Arc<AtomicBool>) -> std::io::Result<bool> {
    let mut runtime = Runtime::default();
    runtime.set_max_depth(cli.max_depth);

    if let Some(path) = &cli.file {
        return match load(path) {
            Ok(program) => {
                runtime.set_program(program);
                run(&mut runtime, &cli.entry, &interrupted)
            }
            Err(error) => {
                print_error(&mut std::io::stdout(), &error)?;
                Ok(false)
            }
        };
    }

    let command = Interface::new("regscript")?;
    command.write_fmt(format_args!(
        "regscript\nlabels, frames and ten registers. Execution begins at `label {}`.\n\n",
        cli.entry
    ))?;

    loop {
        command.set_prompt("Enter number of lines: ")?;
        let count = match read_line(&command)? {
            Some(s) => s.trim().parse::<usize>().ok(),
            None => return Ok(false),
        };
        let count = match count {
            Some(n) if n > 0 && n <= MAX_INSTRUCTIONS => n,
            _ => {
                print_error(&mut std::io::stdout(), &error!(IllegalNumberOfLines))?;
                return Ok(false);
            }
        };

        command.set_prompt("")?;
        match read_program(&command, count) {
            Ok(program) => runtime.set_program(program),
            Err(error) => {
                print_error(&mut std::io::stdout(), &error)?;
                return Ok(false);
            }
        }

        command.write_fmt(format_args!("\nRunning script...\n"))?;
        if !run(&mut runtime, &cli.entry, &interrupted)? {
            return Ok(false);
        }

        command.set_prompt("Another script? (y/N) ")?;
        match read_line(&command)? {
            Some(s) if wants_another(&s) => continue,
            Some(_) => break,
            None => return Ok(false),
        }
    }
    command.write_fmt(format_args!("Thanks for using regscript!\n"))?;
    Ok(true)
}

/// Anything starting with `y` or `Y` is a yes.
fn wants_another(answer: &str) -> bool {
    matches!(answer.trim_start().chars().next(), Some('y') | Some('Y'))
}

fn read_line<T: Terminal>(interface: &Interface<T>) -> std::io::Result<Option<String>> {
    match interface.read_line()? {
        ReadResult::Input(string) => Ok(Some(string)),
        ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
    }
}

fn read_program<T: Terminal>(interface: &Interface<T>, count: usize) -> Result<Program, Error> {
    let mut program = Program::new(count)?;
    while !program.is_complete() {
        let line = match read_line(interface) {
            Ok(Some(line)) => line,
            Ok(None) => {
                return Err(error!(SyntaxError, Some(program.len()); "UNEXPECTED END OF SCRIPT"))
            }
            Err(error) => return Err(error!(InternalError; &error.to_string())),
        };
        program.push_line(&line)?;
        interface.add_history_unique(line);
    }
    Ok(program)
}

/// Runs `entry` to the end. False when the script failed.
fn run(runtime: &mut Runtime, entry: &str, interrupted: &AtomicBool) -> std::io::Result<bool> {
    // The lock is taken per write so the watchdog can always report.
    let stdout = std::io::stdout();
    if let Err(error) = runtime.call(entry) {
        print_error(&mut stdout.lock(), &error)?;
        return Ok(false);
    }
    interrupted.store(false, Ordering::SeqCst);
    let mut success = true;
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(CYCLES_PER_SLICE) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => {
                let mut out = stdout.lock();
                out.write_all(s.as_bytes())?;
                out.flush()?;
            }
            Event::Errors(errors) => {
                success = false;
                let mut out = stdout.lock();
                for error in errors.iter() {
                    print_error(&mut out, error)?;
                }
            }
        }
    }
    Ok(success)
}

fn print_error<W: Write>(out: &mut W, error: &Error) -> std::io::Result<()> {
    writeln!(out, "{}", Style::new().bold().paint(error.to_string()))?;
    out.flush()
}

fn load(filename: &Path) -> Result<Program, Error> {
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; &msg)),
                _ => return Err(error!(InternalError; &msg)),
            }
        }
    };
    let mut lines: Vec<String> = vec![];
    for line in reader.lines() {
        match line {
            Err(error) => return Err(error!(InternalError; &error.to_string())),
            Ok(line) => lines.push(line),
        }
    }
    Program::from_lines(lines.len(), lines.iter().map(|s| s.as_str()))
}
