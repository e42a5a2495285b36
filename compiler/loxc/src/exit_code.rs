//! Process exit codes (BSD `sysexits.h` values).

pub const SUCCESS: i32 = 0;
/// Bad command line.
pub const USAGE: i32 = 64;
/// Lexical or syntax error in the script.
pub const DATA_ERROR: i32 = 65;
/// Script file could not be read.
pub const NO_INPUT: i32 = 66;
/// Runtime fault while executing the script.
pub const SOFTWARE: i32 = 70;
/// Reading interactive input failed.
pub const IO_ERROR: i32 = 74;
