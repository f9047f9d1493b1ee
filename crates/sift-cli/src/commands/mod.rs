pub mod ast;
pub mod check;
pub mod input;
pub mod trace;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod check_tests;
#[cfg(test)]
mod input_tests;
