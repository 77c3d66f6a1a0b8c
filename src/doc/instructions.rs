/*!
# Instructions

One instruction per line. Operands are separated by spaces or tabs.
*/

#[path = "instructions/nop.rs"]
#[allow(non_snake_case)]
pub mod NOP;

#[path = "instructions/label.rs"]
#[allow(non_snake_case)]
pub mod LABEL;

#[path = "instructions/call.rs"]
#[allow(non_snake_case)]
pub mod CALL;

#[path = "instructions/ret.rs"]
#[allow(non_snake_case)]
pub mod RET;

#[path = "instructions/jmp.rs"]
#[allow(non_snake_case)]
pub mod JMP;

#[path = "instructions/cbz.rs"]
#[allow(non_snake_case)]
pub mod CBZ;

#[path = "instructions/def.rs"]
#[allow(non_snake_case)]
pub mod DEF;

#[path = "instructions/mov.rs"]
#[allow(non_snake_case)]
pub mod MOV;

#[path = "instructions/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "instructions/add.rs"]
#[allow(non_snake_case)]
pub mod ADD;

#[path = "instructions/sub.rs"]
#[allow(non_snake_case)]
pub mod SUB;

#[path = "instructions/load.rs"]
#[allow(non_snake_case)]
pub mod LOAD;

#[path = "instructions/store.rs"]
#[allow(non_snake_case)]
pub mod STORE;
