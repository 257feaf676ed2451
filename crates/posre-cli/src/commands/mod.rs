pub mod check;
pub mod dump;
pub mod exec;
pub mod pattern;
pub mod trace;

#[cfg(test)]
mod exec_tests;
#[cfg(test)]
mod pattern_tests;
