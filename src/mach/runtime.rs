use super::{Address, Directive, Listing, Machine, Memory, Opcode, Operation, Val};
use crate::error;
use crate::lang::{lex, Error, LineNumber};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

pub const INPUT_PROMPT: &str = "Input: ";

/// Process exit status for a program's return code.
/// Codes outside the `i32` range saturate instead of wrapping.
pub fn exit_status(code: i64) -> i32 {
    match i32::try_from(code) {
        Ok(status) => status,
        Err(_) if code < 0 => i32::MIN,
        Err(_) => i32::MAX,
    }
}

/// ## Dispatch loop
///
/// Owns the program counter and the machine. Nothing here blocks;
/// printing, reading input and ending the program leave as `Event`s.

pub struct Runtime {
    listing: Listing,
    machine: Machine,
    pc: LineNumber,
    state: State,
}

#[derive(Debug)]
enum State {
    Stopped,
    Running,
    Input(Address),
    Failed(Error),
}

/// Events are returned from `Runtime::execute`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Nothing is running.
    Stopped,
    /// The cycle budget ran out; call `execute` again.
    Running,
    Print(String),
    /// Waiting for `enter` to supply a line.
    Input(String),
    /// The program returned or ran past its last line.
    End(i64),
    /// The program failed and is stopped.
    Error(Error),
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(Memory::default())
    }
}

impl Runtime {
    pub fn new(memory: Memory) -> Runtime {
        Runtime {
            listing: Listing::default(),
            machine: Machine::new(memory),
            pc: 0,
            state: State::Stopped,
        }
    }

    /// Start a program from line zero with cleared memory and flag.
    pub fn load(&mut self, listing: Listing) {
        self.listing = listing;
        self.machine.reset();
        self.pc = 0;
        self.state = State::Running;
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    pub fn memory(&self) -> &Memory {
        &self.machine.memory
    }

    pub fn pc(&self) -> LineNumber {
        self.pc
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.state, State::Stopped)
    }

    /// Supply the line an `INP` is waiting for.
    /// Returns false if nothing was waiting.
    pub fn enter(&mut self, s: &str) -> bool {
        if let State::Input(address) = self.state {
            let text = s.trim_end_matches(&['\r', '\n'][..]);
            if let Err(error) = self.machine.memory.write(address, Val::from(text)) {
                self.state = State::Failed(error.in_line_number(self.pc));
                return false;
            }
            self.pc += 1;
            self.state = State::Running;
            true
        } else {
            false
        }
    }

    pub fn interrupt(&mut self) {
        match self.state {
            State::Running | State::Input(_) => {
                self.state = State::Failed(error!(Break, self.pc));
            }
            State::Stopped | State::Failed(_) => {}
        }
    }

    /// Run at most `cycles` instructions.
    pub fn execute(&mut self, cycles: usize) -> Event {
        match self.state {
            State::Stopped => return Event::Stopped,
            State::Input(_) => return Event::Input(INPUT_PROMPT.to_string()),
            State::Failed(_) => {
                if let State::Failed(error) = std::mem::replace(&mut self.state, State::Stopped) {
                    return Event::Error(error);
                }
            }
            State::Running => {}
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => continue,
                Ok(Some(event)) => return event,
                Err(error) => {
                    self.state = State::Stopped;
                    return Event::Error(error.in_line_number(self.pc));
                }
            }
        }
        Event::Running
    }

    fn step(&mut self) -> Result<Option<Event>> {
        let instruction = match self.listing.line(self.pc) {
            Some(line) => lex(line),
            None => {
                self.state = State::Stopped;
                return Ok(Some(Event::End(0)));
            }
        };
        let instruction = match instruction {
            Some(instruction) => instruction,
            None => {
                self.pc += 1;
                return Ok(None);
            }
        };
        let opcode = instruction.opcode().parse::<Opcode>()?;
        match Operation::invoke(opcode, &mut self.machine, instruction.args())? {
            Directive::Advance => {
                self.pc += 1;
                Ok(None)
            }
            Directive::Jump(line) => {
                self.pc = line;
                Ok(None)
            }
            Directive::Terminate(code) => {
                self.state = State::Stopped;
                Ok(Some(Event::End(code)))
            }
            Directive::Print(s) => {
                self.pc += 1;
                Ok(Some(Event::Print(s)))
            }
            Directive::Input(address) => {
                self.state = State::Input(address);
                Ok(Some(Event::Input(INPUT_PROMPT.to_string())))
            }
        }
    }
}
