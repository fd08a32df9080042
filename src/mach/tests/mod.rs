use crate::mach::{Event, Runtime};


fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
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
                s.push_str(&format!("Program ended with code {}\n", code));
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}
