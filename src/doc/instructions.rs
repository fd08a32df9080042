/*!
# Instructions
*/

#[path = "instructions/add.rs"]
#[allow(non_snake_case)]
pub mod ADD;

#[path = "instructions/cmp.rs"]
#[allow(non_snake_case)]
pub mod CMP;

#[path = "instructions/inp.rs"]
#[allow(non_snake_case)]
pub mod INP;

#[path = "instructions/jg.rs"]
#[allow(non_snake_case)]
pub mod JG;

#[path = "instructions/jl.rs"]
#[allow(non_snake_case)]
pub mod JL;

#[path = "instructions/jmp.rs"]
#[allow(non_snake_case)]
pub mod JMP;

#[path = "instructions/mov.rs"]
#[allow(non_snake_case)]
pub mod MOV;

#[path = "instructions/out.rs"]
#[allow(non_snake_case)]
pub mod OUT;

#[path = "instructions/ret.rs"]
#[allow(non_snake_case)]
pub mod RET;
