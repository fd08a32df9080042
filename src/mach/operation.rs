use super::{Address, Flag, Memory, Opcode, Val};
use crate::error;
use crate::lang::{Error, LineNumber};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Machine state seen by operations
///
/// The program counter is not here. Only the dispatch loop moves it,
/// guided by the `Directive` an operation returns.

#[derive(Debug, Default)]
pub struct Machine {
    pub memory: Memory,
    pub flag: Flag,
}

impl Machine {
    pub fn new(memory: Memory) -> Machine {
        Machine {
            memory,
            flag: Flag::default(),
        }
    }

    pub fn reset(&mut self) {
        self.memory.clear();
        self.flag = Flag::default();
    }
}

/// What the dispatch loop does after an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Advance,
    Jump(LineNumber),
    Terminate(i64),
    /// Advance after the front end prints the text.
    Print(String),
    /// Advance after the front end supplies a line for the address.
    Input(Address),
}

pub struct Operation {}

impl Operation {
    pub fn invoke(opcode: Opcode, machine: &mut Machine, args: &[String]) -> Result<Directive> {
        use Opcode::*;
        opcode.check_arity(args.len())?;
        match opcode {
            Out => Operation::out(machine, args),
            Inp => Operation::inp(machine, args),
            Mov => Operation::mov(machine, args),
            Add => Operation::add(machine, args),
            Cmp => Operation::cmp(machine, args),
            Jmp => Operation::jmp(machine, args),
            Jg => Operation::jump_if(machine, args, Flag::Greater),
            Jl => Operation::jump_if(machine, args, Flag::Less),
            Ret => Operation::ret(machine, args),
        }
    }

    pub fn out(machine: &mut Machine, args: &[String]) -> Result<Directive> {
        let val = machine.memory.resolve(&args[0])?;
        Ok(Directive::Print(val.to_string()))
    }

    pub fn inp(machine: &mut Machine, args: &[String]) -> Result<Directive> {
        let dest = Operation::destination(machine, &args[0])?;
        Ok(Directive::Input(dest))
    }

    pub fn mov(machine: &mut Machine, args: &[String]) -> Result<Directive> {
        let dest = Operation::destination(machine, &args[0])?;
        let val = machine.memory.resolve(&args[1])?;
        machine.memory.write(dest, val)?;
        Ok(Directive::Advance)
    }

    pub fn add(machine: &mut Machine, args: &[String]) -> Result<Directive> {
        let dest = Operation::destination(machine, &args[0])?;
        let lhs = machine.memory.read(dest)?.to_integer()?;
        let rhs = machine.memory.resolve(&args[1])?.to_integer()?;
        let sum = match lhs.checked_add(rhs) {
            Some(sum) => sum,
            None => return Err(error!(Overflow)),
        };
        machine.memory.write(dest, Val::Integer(sum))?;
        Ok(Directive::Advance)
    }

    pub fn cmp(machine: &mut Machine, args: &[String]) -> Result<Directive> {
        let a = machine.memory.resolve(&args[0])?.to_integer()?;
        let b = machine.memory.resolve(&args[1])?.to_integer()?;
        machine.flag = Flag::from(a.cmp(&b));
        Ok(Directive::Advance)
    }

    pub fn jmp(machine: &mut Machine, args: &[String]) -> Result<Directive> {
        Ok(Directive::Jump(Operation::line_number(machine, &args[0])?))
    }

    fn jump_if(machine: &mut Machine, args: &[String], flag: Flag) -> Result<Directive> {
        let line = Operation::line_number(machine, &args[0])?;
        if machine.flag == flag {
            Ok(Directive::Jump(line))
        } else {
            Ok(Directive::Advance)
        }
    }

    pub fn ret(machine: &mut Machine, args: &[String]) -> Result<Directive> {
        let code = match args.first() {
            Some(arg) => machine.memory.resolve(arg)?.to_integer()?,
            None => 0,
        };
        Ok(Directive::Terminate(code))
    }

    fn destination(machine: &Machine, token: &str) -> Result<Address> {
        if !Memory::is_address(token) {
            return Err(error!(AddressResolution; &format!(
                "DESTINATION {:?} IS NOT AN ADDRESS",
                token
            )));
        }
        machine.memory.address(token)
    }

    fn line_number(machine: &Machine, token: &str) -> Result<LineNumber> {
        let n = machine.memory.resolve(token)?.to_integer()?;
        match LineNumber::try_from(n) {
            Ok(line) => Ok(line),
            Err(_) => Err(error!(TypeMismatch; &format!("{} IS NOT A LINE NUMBER", n))),
        }
    }
}
