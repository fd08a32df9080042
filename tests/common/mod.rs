#![allow(dead_code)]
use basm::mach::{Event, Listing, Runtime};

pub fn runtime(source: &str) -> Runtime {
    let mut runtime = Runtime::default();
    runtime.load(source.parse::<Listing>().unwrap());
    runtime
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&format!("{}\n", ps));
            }
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
            Event::End(code) => {
                s.push_str(&format!("END {}\n", code));
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

/// Drain events until the runtime stops, returning the final one
/// that isn't `Stopped`.
pub fn last_event(runtime: &mut Runtime) -> Event {
    let mut last = Event::Stopped;
    loop {
        match runtime.execute(5000) {
            Event::Stopped => return last,
            Event::Input(prompt) => return Event::Input(prompt),
            event => last = event,
        }
    }
}
