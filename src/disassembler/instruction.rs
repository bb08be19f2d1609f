//! Decoded instruction representation.
//!
//! Methods carry their bodies as flat `Vec<Instruction>` sequences; positions are plain
//! integer indices into that vector. All operand references (fields, methods, classes,
//! string constants) are resolved to their textual form by the class provider, so
//! matching never touches raw constant-pool indices.

use std::fmt;
use std::sync::Arc;

use crate::{
    disassembler::opcodes::{InsnKind, Opcode},
    metadata::MemberRef,
};

/// Operand of one decoded instruction.
///
/// The class provider resolves pool-index operands into the referenced values,
/// which is what the matching primitives compare against.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// No operand.
    None,
    /// Signed byte immediate (`bipush`).
    Byte(i8),
    /// Signed short immediate (`sipush`).
    Short(i16),
    /// 32-bit integer constant (`ldc` of an int).
    Int(i32),
    /// 64-bit integer constant (`ldc2_w` of a long).
    Long(i64),
    /// 32-bit float constant.
    Float(f32),
    /// 64-bit float constant.
    Double(f64),
    /// String constant (`ldc` of a string).
    Utf8(Arc<str>),
    /// Class reference by internal name (`new`, `checkcast`, `anewarray`, ...).
    ClassRef(String),
    /// Field reference (`getfield` family).
    FieldRef(MemberRef),
    /// Method reference (`invoke*` family).
    MethodRef(MemberRef),
    /// Local variable index (`iload`, `astore`, `ret`, `iinc`, ...).
    Local(u16),
    /// Relative branch offset in bytes, as encoded.
    Branch(i32),
    /// Switch branch offsets (`tableswitch` / `lookupswitch`).
    Switch(Vec<i32>),
}

/// One decoded instruction inside a method body.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Position of this instruction in the owning method's sequence.
    pub index: usize,
    /// The opcode.
    pub opcode: Opcode,
    /// The resolved operand.
    pub operand: Operand,
}

impl Instruction {
    /// Creates an instruction.
    ///
    /// # Arguments
    ///
    /// * `index` - Position in the owning method's sequence
    /// * `opcode` - The opcode
    /// * `operand` - The resolved operand
    #[must_use]
    pub fn new(index: usize, opcode: Opcode, operand: Operand) -> Self {
        Self {
            index,
            opcode,
            operand,
        }
    }

    /// Returns the coarse classification of this instruction.
    #[must_use]
    pub fn kind(&self) -> InsnKind {
        self.opcode.kind()
    }

    /// Returns the referenced field if this is a field access.
    #[must_use]
    pub fn field_ref(&self) -> Option<&MemberRef> {
        match &self.operand {
            Operand::FieldRef(member) => Some(member),
            _ => None,
        }
    }

    /// Returns the referenced method if this is a method call.
    #[must_use]
    pub fn method_ref(&self) -> Option<&MemberRef> {
        match &self.operand {
            Operand::MethodRef(member) => Some(member),
            _ => None,
        }
    }

    /// Returns the referenced class internal name if this is a type reference.
    #[must_use]
    pub fn class_ref(&self) -> Option<&str> {
        match &self.operand {
            Operand::ClassRef(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the string constant this instruction loads, if any.
    #[must_use]
    pub fn loaded_string(&self) -> Option<&str> {
        match (&self.opcode, &self.operand) {
            (Opcode::Ldc | Opcode::LdcW, Operand::Utf8(s)) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Returns the 32-bit integer constant this instruction loads, if any.
    ///
    /// Covers the implicit `iconst_*` forms as well as `bipush`, `sipush`
    /// and `ldc` of an int.
    #[must_use]
    pub fn loaded_int(&self) -> Option<i32> {
        match (&self.opcode, &self.operand) {
            (Opcode::IConstM1, _) => Some(-1),
            (Opcode::IConst0, _) => Some(0),
            (Opcode::IConst1, _) => Some(1),
            (Opcode::IConst2, _) => Some(2),
            (Opcode::IConst3, _) => Some(3),
            (Opcode::IConst4, _) => Some(4),
            (Opcode::IConst5, _) => Some(5),
            (Opcode::BiPush, Operand::Byte(v)) => Some(i32::from(*v)),
            (Opcode::SiPush, Operand::Short(v)) => Some(i32::from(*v)),
            (Opcode::Ldc | Opcode::LdcW, Operand::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Returns true if this instruction loads the given string constant.
    ///
    /// # Arguments
    ///
    /// * `literal` - The exact string to compare against
    #[must_use]
    pub fn is_ldc_string(&self, literal: &str) -> bool {
        self.loaded_string() == Some(literal)
    }

    /// Returns true if this instruction loads the given integer constant.
    ///
    /// # Arguments
    ///
    /// * `value` - The integer to compare against
    #[must_use]
    pub fn is_ldc_int(&self, value: i32) -> bool {
        self.loaded_int() == Some(value)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operand {
            Operand::None => write!(f, "{}", self.opcode),
            Operand::Utf8(s) => write!(f, "{} \"{}\"", self.opcode, s),
            Operand::FieldRef(m) | Operand::MethodRef(m) => write!(f, "{} {}", self.opcode, m),
            Operand::ClassRef(c) => write!(f, "{} {}", self.opcode, c),
            other => write!(f, "{} {:?}", self.opcode, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_int_forms() {
        let iconst = Instruction::new(0, Opcode::IConstM1, Operand::None);
        assert_eq!(iconst.loaded_int(), Some(-1));

        let bipush = Instruction::new(0, Opcode::BiPush, Operand::Byte(42));
        assert_eq!(bipush.loaded_int(), Some(42));

        let sipush = Instruction::new(0, Opcode::SiPush, Operand::Short(-300));
        assert_eq!(sipush.loaded_int(), Some(-300));

        let ldc = Instruction::new(0, Opcode::Ldc, Operand::Int(0x1234_5678));
        assert_eq!(ldc.loaded_int(), Some(0x1234_5678));
        assert!(ldc.is_ldc_int(0x1234_5678));

        let other = Instruction::new(0, Opcode::ILoad0, Operand::None);
        assert_eq!(other.loaded_int(), None);
    }

    #[test]
    fn test_loaded_string() {
        let ldc = Instruction::new(0, Opcode::Ldc, Operand::Utf8("Options".into()));
        assert!(ldc.is_ldc_string("Options"));
        assert!(!ldc.is_ldc_string("Controls"));

        // A non-ldc opcode never matches even with a string operand.
        let bogus = Instruction::new(0, Opcode::Nop, Operand::Utf8("Options".into()));
        assert!(!bogus.is_ldc_string("Options"));
    }

    #[test]
    fn test_reference_accessors() {
        let member = MemberRef::new("x/Y", "f", "I");
        let get = Instruction::new(3, Opcode::GetField, Operand::FieldRef(member.clone()));
        assert_eq!(get.field_ref(), Some(&member));
        assert_eq!(get.method_ref(), None);

        let new = Instruction::new(4, Opcode::New, Operand::ClassRef("x/Y".into()));
        assert_eq!(new.class_ref(), Some("x/Y"));
        assert_eq!(new.kind(), InsnKind::ObjectOp);
    }
}
