use crate::error;
use crate::lang::Error;
use std::ops::RangeInclusive;

type Result<T> = std::result::Result<T, Error>;

/// ## Instruction set
///
/// The machine has no registers besides the comparison flag.
/// Every operand is a literal or a memory address.
///
/// For example: `ADD 0x00, 3` reads address zero as an integer,
/// adds three, and writes the sum back to address zero.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Input and output
    /// Print the value of the argument.
    Out,
    /// Prompt for one line of input and store it as text.
    Inp,

    // *** Memory
    /// Copy the value of the source into the destination address.
    Mov,
    /// Integer sum of destination and source, stored in the destination.
    Add,

    // *** Branch control
    /// Set the comparison flag from two integer operands.
    Cmp,
    /// Unconditional jump to a line.
    Jmp,
    /// Jump when the flag is GREATER.
    Jg,
    /// Jump when the flag is LESS.
    Jl,
    /// End the program with an optional return code.
    Ret,
}

impl std::str::FromStr for Opcode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Opcode> {
        use Opcode::*;
        match s {
            "OUT" => Ok(Out),
            "INP" => Ok(Inp),
            "MOV" => Ok(Mov),
            "ADD" => Ok(Add),
            "CMP" => Ok(Cmp),
            "JMP" => Ok(Jmp),
            "JG" => Ok(Jg),
            "JL" => Ok(Jl),
            "RET" => Ok(Ret),
            _ => Err(error!(UnknownOpcode; s)),
        }
    }
}

impl Opcode {
    pub fn arity(&self) -> RangeInclusive<usize> {
        use Opcode::*;
        match self {
            Out | Inp | Jmp | Jg | Jl => 1..=1,
            Mov | Add | Cmp => 2..=2,
            Ret => 0..=1,
        }
    }

    pub fn check_arity(&self, given: usize) -> Result<()> {
        let arity = self.arity();
        if arity.contains(&given) {
            return Ok(());
        }
        let required = if arity.start() == arity.end() {
            arity.start().to_string()
        } else {
            format!("{} TO {}", arity.start(), arity.end())
        };
        Err(error!(ArgumentCount; &format!(
            "{} TAKES {} ARGUMENTS BUT {} GIVEN",
            self, required, given
        )))
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Out => write!(f, "OUT"),
            Inp => write!(f, "INP"),
            Mov => write!(f, "MOV"),
            Add => write!(f, "ADD"),
            Cmp => write!(f, "CMP"),
            Jmp => write!(f, "JMP"),
            Jg => write!(f, "JG"),
            Jl => write!(f, "JL"),
            Ret => write!(f, "RET"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_lookup() {
        assert_eq!("MOV".parse::<Opcode>(), Ok(Opcode::Mov));
        assert_eq!("JG".parse::<Opcode>(), Ok(Opcode::Jg));
        let e = "NOP".parse::<Opcode>().unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnknownOpcode);
        assert_eq!(e.text(), "NOP");
    }

    #[test]
    fn test_arity_error_names_opcode() {
        let e = Opcode::Mov.check_arity(1).unwrap_err();
        assert_eq!(e.code(), ErrorCode::ArgumentCount);
        assert_eq!(e.text(), "MOV TAKES 2 ARGUMENTS BUT 1 GIVEN");
    }

    #[test]
    fn test_ret_optional_code() {
        assert!(Opcode::Ret.check_arity(0).is_ok());
        assert!(Opcode::Ret.check_arity(1).is_ok());
        let e = Opcode::Ret.check_arity(2).unwrap_err();
        assert_eq!(e.text(), "RET TAKES 0 TO 1 ARGUMENTS BUT 2 GIVEN");
    }
}
