//! Fixture factories for unit tests.
//!
//! Builders for hand-crafted classes and methods, plus an in-memory
//! [`ClassProvider`] so cache- and scheduler-level tests run without any
//! archive on disk.

use std::collections::HashMap;

use crate::{
    disassembler::{Instruction, Opcode, Operand},
    metadata::{
        AccessFlags, ClassModel, ClassProvider, ConstantPool, FieldModel, MemberRef, MethodModel,
        PoolEntry,
    },
    Result,
};

/// Creates an instruction with a placeholder index.
///
/// Builders renumber instructions by position, so tests list bodies without
/// tracking indices by hand.
pub fn insn(opcode: Opcode, operand: Operand) -> Instruction {
    Instruction::new(0, opcode, operand)
}

/// Creates a method with its instructions renumbered by position.
pub fn method_fixture(
    name: &str,
    descriptor: &str,
    access: AccessFlags,
    instructions: Vec<Instruction>,
) -> MethodModel {
    MethodModel {
        name: name.to_string(),
        descriptor: descriptor.to_string(),
        access,
        instructions: renumber(instructions),
    }
}

fn renumber(instructions: Vec<Instruction>) -> Vec<Instruction> {
    instructions
        .into_iter()
        .enumerate()
        .map(|(index, mut instruction)| {
            instruction.index = index;
            instruction
        })
        .collect()
}

/// Starts building a class fixture with the given binary name.
pub fn class_fixture(name: &str) -> ClassFixture {
    ClassFixture {
        name: name.to_string(),
        super_name: Some("java/lang/Object".to_string()),
        interfaces: Vec::new(),
        access: AccessFlags::PUBLIC,
        fields: Vec::new(),
        methods: Vec::new(),
        pool: Vec::new(),
    }
}

/// Builder for hand-crafted [`ClassModel`]s.
pub struct ClassFixture {
    name: String,
    super_name: Option<String>,
    interfaces: Vec<String>,
    access: AccessFlags,
    fields: Vec<FieldModel>,
    methods: Vec<MethodModel>,
    pool: Vec<PoolEntry>,
}

impl ClassFixture {
    /// Sets the superclass.
    pub fn super_name(mut self, name: &str) -> Self {
        self.super_name = Some(name.to_string());
        self
    }

    /// Appends an implemented interface.
    pub fn interface(mut self, name: &str) -> Self {
        self.interfaces.push(name.to_string());
        self
    }

    /// Sets the class access flags.
    pub fn access(mut self, access: AccessFlags) -> Self {
        self.access = access;
        self
    }

    /// Appends a field.
    pub fn field(mut self, name: &str, descriptor: &str, access: AccessFlags) -> Self {
        self.fields.push(FieldModel {
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            access,
        });
        self
    }

    /// Appends a method; instructions are renumbered by position.
    pub fn method(
        mut self,
        name: &str,
        descriptor: &str,
        access: AccessFlags,
        instructions: Vec<Instruction>,
    ) -> Self {
        self.methods
            .push(method_fixture(name, descriptor, access, instructions));
        self
    }

    /// Appends string literals to the constant pool.
    pub fn pool_strings(mut self, literals: &[&str]) -> Self {
        self.pool
            .extend(literals.iter().map(|s| PoolEntry::Utf8((*s).to_string())));
        self
    }

    /// Appends class references to the constant pool.
    pub fn pool_class_refs(mut self, names: &[&str]) -> Self {
        self.pool
            .extend(names.iter().map(|n| PoolEntry::ClassRef((*n).to_string())));
        self
    }

    /// Appends a field reference to the constant pool.
    pub fn pool_field_ref(mut self, field: MemberRef) -> Self {
        self.pool.push(PoolEntry::FieldRef(field));
        self
    }

    /// Appends a method reference to the constant pool.
    pub fn pool_method_ref(mut self, method: MemberRef) -> Self {
        self.pool.push(PoolEntry::MethodRef(method));
        self
    }

    /// Appends an integer literal to the constant pool.
    pub fn pool_int(mut self, value: i32) -> Self {
        self.pool.push(PoolEntry::Integer(value));
        self
    }

    /// Finishes the class model.
    pub fn build(self) -> ClassModel {
        ClassModel {
            name: self.name,
            super_name: self.super_name,
            interfaces: self.interfaces,
            access: self.access,
            fields: self.fields,
            methods: self.methods,
            pool: ConstantPool::new(self.pool),
        }
    }
}

/// In-memory class provider over a fixed set of fixture classes.
pub struct FixtureProvider {
    classes: HashMap<String, ClassModel>,
}

impl FixtureProvider {
    /// Creates a provider with no classes; every load misses.
    pub fn empty() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Creates a provider serving the given classes by name.
    pub fn with_classes(classes: Vec<ClassModel>) -> Self {
        Self {
            classes: classes
                .into_iter()
                .map(|class| (class.name.clone(), class))
                .collect(),
        }
    }
}

impl ClassProvider for FixtureProvider {
    fn load(&self, binary_name: &str) -> Result<Option<ClassModel>> {
        Ok(self.classes.get(binary_name).cloned())
    }
}
