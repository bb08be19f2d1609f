//! Instruction-sequence matching over method bodies.
//!
//! These primitives implement the "find code near a known anchor" half of the rule
//! vocabulary: exact opcode patterns at a position, forward scans that collect one kind
//! of instruction while ignoring everything else, and the ldc anchors used to locate
//! code around a known literal. All scans are bounds-checked index walks over the
//! method's flat instruction vector.

use crate::{
    disassembler::{InsnKind, Instruction, Opcode},
    metadata::{MemberRef, MethodModel},
};

/// Returns true if the exact opcode sequence occurs starting at `start`.
///
/// # Arguments
///
/// * `method` - The method whose body to test
/// * `start` - Index of the first instruction of the expected pattern
/// * `opcodes` - Expected opcodes, in order, with no gaps
#[must_use]
pub fn match_opcode_sequence(method: &MethodModel, start: usize, opcodes: &[Opcode]) -> bool {
    opcode_sequence(method, start, opcodes).is_some()
}

/// Returns the instructions forming the given opcode sequence starting at `start`.
///
/// # Arguments
///
/// * `method` - The method whose body to test
/// * `start` - Index of the first instruction of the expected pattern
/// * `opcodes` - Expected opcodes, in order, with no gaps
///
/// # Returns
///
/// The matched instruction slice, or `None` if the pattern does not occur at
/// `start` (including when it would run past the end of the body).
#[must_use]
pub fn opcode_sequence<'m>(
    method: &'m MethodModel,
    start: usize,
    opcodes: &[Opcode],
) -> Option<&'m [Instruction]> {
    let end = start.checked_add(opcodes.len())?;
    let window = method.instructions.get(start..end)?;
    window
        .iter()
        .zip(opcodes)
        .all(|(insn, expected)| insn.opcode == *expected)
        .then_some(window)
}

/// Returns the first instruction of the given kind at or after `start`.
///
/// Instructions of other kinds are skipped, so an anchor match can be followed
/// by "the next field access" without caring what sits in between.
///
/// # Arguments
///
/// * `method` - The method whose body to scan
/// * `start` - Index to start scanning at (inclusive)
/// * `kind` - The classification to stop at
#[must_use]
pub fn next_insn_of_kind(method: &MethodModel, start: usize, kind: InsnKind) -> Option<&Instruction> {
    method
        .instructions
        .get(start..)?
        .iter()
        .find(|insn| insn.kind() == kind)
}

/// Returns all instructions of the given kind in the method body, in order.
///
/// # Arguments
///
/// * `method` - The method whose body to scan
/// * `kind` - The classification to collect
#[must_use]
pub fn insns_of_kind(method: &MethodModel, kind: InsnKind) -> Vec<&Instruction> {
    method
        .instructions
        .iter()
        .filter(|insn| insn.kind() == kind)
        .collect()
}

/// Returns the first instruction loading the given string constant.
///
/// The usual anchor for "find the code near this known UI/log text."
///
/// # Arguments
///
/// * `method` - The method whose body to scan
/// * `literal` - The exact string constant
#[must_use]
pub fn find_ldc_string<'m>(method: &'m MethodModel, literal: &str) -> Option<&'m Instruction> {
    method
        .instructions
        .iter()
        .find(|insn| insn.is_ldc_string(literal))
}

/// Returns the first instruction loading the given integer constant.
///
/// Matches any constant-load form of the value (`iconst_*`, `bipush`,
/// `sipush`, `ldc`), the anchor for "find the code near this magic number."
///
/// # Arguments
///
/// * `method` - The method whose body to scan
/// * `value` - The exact integer constant
#[must_use]
pub fn find_ldc_int(method: &MethodModel, value: i32) -> Option<&Instruction> {
    method
        .instructions
        .iter()
        .find(|insn| insn.is_ldc_int(value))
}

/// Recognizes the trivial getter shape and returns the field it loads.
///
/// Two shapes qualify:
/// - instance getter: `aload_0; getfield; <t>return` as the whole body
/// - static getter: `getstatic; <t>return` as the whole body
///
/// Anything longer, reordered, or ending in a non-return is not a getter and
/// yields `None`.
///
/// # Arguments
///
/// * `method` - The method to classify
#[must_use]
pub fn infer_getter(method: &MethodModel) -> Option<&MemberRef> {
    match method.instructions.as_slice() {
        [load, ret] if load.opcode == Opcode::GetStatic && ret.kind() == InsnKind::Return => {
            load.field_ref()
        }
        [this, load, ret]
            if this.opcode == Opcode::ALoad0
                && load.opcode == Opcode::GetField
                && ret.kind() == InsnKind::Return =>
        {
            load.field_ref()
        }
        _ => None,
    }
}
