//! JVM instruction model: the opcode table and decoded instruction sequences.
//!
//! Method bodies arrive from the class provider as flat, read-only instruction vectors.
//! This module defines the vocabulary those vectors are written in and the coarse
//! [`InsnKind`] classification the matching primitives filter by.
//!
//! # Key Types
//! - [`Opcode`] - The full standard JVM opcode table with mnemonics
//! - [`InsnKind`] - Coarse classification (field access, method call, branch, ...)
//! - [`Instruction`] - One decoded instruction with its resolved operand
//! - [`Operand`] - Immediates, resolved references, branch targets
//!
//! # Example
//! ```rust
//! use jarscope::disassembler::{Instruction, Opcode, Operand};
//!
//! let insn = Instruction::new(0, Opcode::Ldc, Operand::Utf8("Options".into()));
//! assert!(insn.is_ldc_string("Options"));
//! assert_eq!(insn.opcode.to_string(), "ldc");
//! ```

mod instruction;
mod opcodes;

pub use instruction::{Instruction, Operand};
pub use opcodes::{InsnKind, Opcode};
