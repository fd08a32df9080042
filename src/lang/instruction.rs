/// ## One tokenized line of source
///
/// The opcode is already upper-cased. Arguments are raw tokens; deciding
/// between a literal and an address happens when an operation reads them.

#[derive(Debug, PartialEq, Clone)]
pub struct Instruction {
    opcode: String,
    args: Vec<String>,
}

impl Instruction {
    pub fn new(opcode: &str, args: Vec<String>) -> Instruction {
        Instruction {
            opcode: opcode.to_ascii_uppercase(),
            args,
        }
    }

    pub fn opcode(&self) -> &str {
        &self.opcode
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.opcode)
        } else {
            write!(f, "{} {}", self.opcode, self.args.join(", "))
        }
    }
}
