//! Structural verification of compiled programs.
//!
//! The compiler runs this in debug builds; the VM relies on these invariants
//! but still degrades to an error (never a panic) when they are broken.

use crate::instructions::Atom;
use crate::program::Program;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgramError {
    #[error("program does not end with EndOfProgram")]
    MissingEnd,

    #[error("group {0} markers are missing or out of order")]
    GroupMarkers(u16),

    #[error("group {0} start and end markers disagree on repetition")]
    GroupRepeat(u16),

    #[error("alternative at {0} points outside the program")]
    DanglingAlternative(usize),

    #[error("instruction at {0} references unknown group {1}")]
    UnknownGroup(usize, u16),

    #[error("anchor at {0} carries a repetition")]
    RepeatedAnchor(usize),
}

impl Program {
    /// Check the structural invariants the matcher depends on.
    pub fn verify(&self) -> Result<(), ProgramError> {
        let insts = self.insts();
        let last = insts.len().checked_sub(1).ok_or(ProgramError::MissingEnd)?;
        if insts[last].atom != Atom::EndOfProgram {
            return Err(ProgramError::MissingEnd);
        }

        let whole = self.group(0).ok_or(ProgramError::GroupMarkers(0))?;
        if whole.start != 0 || whole.end as usize != last {
            return Err(ProgramError::GroupMarkers(0));
        }

        for (index, span) in self.groups().iter().enumerate().skip(1) {
            let g = index as u16;
            let (start, end) = (span.start as usize, span.end as usize);
            let (Some(open), Some(close)) = (insts.get(start), insts.get(end)) else {
                return Err(ProgramError::GroupMarkers(g));
            };
            if start >= end || open.atom != Atom::GroupStart(g) || close.atom != Atom::GroupEnd(g)
            {
                return Err(ProgramError::GroupMarkers(g));
            }
            if open.repeat != close.repeat {
                return Err(ProgramError::GroupRepeat(g));
            }
        }

        let ngroups = self.groups().len();
        for (pc, inst) in insts.iter().enumerate() {
            match inst.atom {
                Atom::AltStart { next } if next != 0 => {
                    let target = pc + next as usize;
                    let lands_on_alt = insts
                        .get(target)
                        .is_some_and(|i| matches!(i.atom, Atom::AltStart { .. }));
                    if !lands_on_alt {
                        return Err(ProgramError::DanglingAlternative(pc));
                    }
                }
                Atom::AltEnd { group } | Atom::BackRef(group) | Atom::BackRefFold(group)
                    if group as usize >= ngroups =>
                {
                    return Err(ProgramError::UnknownGroup(pc, group));
                }
                _ if inst.atom.is_anchor() && !inst.repeat.is_once() => {
                    return Err(ProgramError::RepeatedAnchor(pc));
                }
                _ => {}
            }
        }

        Ok(())
    }
}
