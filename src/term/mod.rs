extern crate ctrlc;
mod console;

use basm::mach::{exit_status, Event, Listing, Memory, Runtime, MAX_MEMORY};
use clap::Parser;
use console::Console;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "basm", about = "Run a BASM program")]
struct Cli {
    /// Program to run. Asked for on the console when missing.
    path: Option<PathBuf>,

    /// Number of memory cells.
    #[arg(long, default_value_t = MAX_MEMORY)]
    memory: usize,

    /// Instructions executed between checks for Ctrl-C.
    #[arg(long, default_value_t = 5000)]
    cycles: usize,

    /// Print console lines without the time prefix.
    #[arg(long)]
    no_timestamps: bool,

    /// Skip the memory dump after the program ends.
    #[arg(long)]
    no_dump: bool,
}

pub fn main() {
    let cli = Cli::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    match main_loop(&cli, interrupted) {
        Ok(status) => std::process::exit(status),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn main_loop(cli: &Cli, interrupted: Arc<AtomicBool>) -> std::io::Result<i32> {
    let console = Console::new(!cli.no_timestamps)?;
    let path = match &cli.path {
        Some(path) => path.clone(),
        None => match console.prompt("Enter directory of code file: ")? {
            Some(s) => PathBuf::from(s.trim()),
            None => return Ok(0),
        },
    };
    let listing = match Listing::open(&path) {
        Ok(listing) => listing,
        Err(error) => {
            console.error(&error)?;
            return Ok(1);
        }
    };

    let mut runtime = Runtime::new(Memory::new(cli.memory));
    runtime.load(listing);
    console.log("--- START PROGRAM ---")?;
    let status = run(&console, &mut runtime, cli.cycles.max(1), &interrupted)?;
    console.log("--- END PROGRAM ---")?;

    if !cli.no_dump {
        console.log("--- DEBUG INFO ---")?;
        for (address, val) in runtime.memory().dump() {
            console.log(&format!("{:#x} = {}", address, val))?;
        }
    }
    Ok(status)
}

fn run(
    console: &Console,
    runtime: &mut Runtime,
    cycles: usize,
    interrupted: &AtomicBool,
) -> std::io::Result<i32> {
    let mut status = 0;
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(cycles) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => console.log(&s)?,
            Event::Input(prompt) => match console.prompt(&prompt)? {
                Some(s) => {
                    runtime.enter(&s);
                }
                None => runtime.interrupt(),
            },
            Event::End(code) => {
                console.log(&format!("Program ended with code {}", code))?;
                status = exit_status(code);
            }
            Event::Error(error) => {
                console.error(&error)?;
                status = 1;
            }
        }
    }
    Ok(status)
}
