//! JVM access-flag masks for classes, fields and methods.
//!
//! Access flags are part of the structural fingerprint rules match on: a rule looking for
//! a singleton accessor will typically require `PUBLIC | STATIC`, and wildcarded member
//! queries treat an absent flag filter as "match anything".

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Access and property flags of a class, field or method.
    ///
    /// The constants follow the JVM class-file access mask. Flags that only apply to one
    /// kind of declaration (e.g. [`AccessFlags::VOLATILE`] for fields,
    /// [`AccessFlags::SYNCHRONIZED`] for methods) share mask bits, as they do in the
    /// class-file format itself.
    pub struct AccessFlags: u16 {
        /// Declared `public`; accessible from outside its package.
        const PUBLIC = 0x0001;
        /// Declared `private`; accessible only within the defining class.
        const PRIVATE = 0x0002;
        /// Declared `protected`; accessible within subclasses.
        const PROTECTED = 0x0004;
        /// Declared `static`.
        const STATIC = 0x0008;
        /// Declared `final`; no subclasses / no reassignment / not overridden.
        const FINAL = 0x0010;
        /// Declared `synchronized` (methods); `super` semantics for classes.
        const SYNCHRONIZED = 0x0020;
        /// A bridge method generated by the compiler (methods); `volatile` shares
        /// this bit on fields.
        const BRIDGE = 0x0040;
        /// Declared `volatile`; cannot be cached (fields).
        const VOLATILE = 0x0040;
        /// Declared with a variable number of arguments (methods); `transient`
        /// shares this bit on fields.
        const VARARGS = 0x0080;
        /// Declared `transient`; not written by default serialization (fields).
        const TRANSIENT = 0x0080;
        /// Declared `native`; implemented outside the JVM.
        const NATIVE = 0x0100;
        /// An interface, not a class.
        const INTERFACE = 0x0200;
        /// Declared `abstract`; no implementation provided.
        const ABSTRACT = 0x0400;
        /// Declared `strictfp`; floating-point mode is FP-strict.
        const STRICT = 0x0800;
        /// Not present in the source code; generated by the compiler.
        const SYNTHETIC = 0x1000;
        /// Declared as an annotation interface.
        const ANNOTATION = 0x2000;
        /// Declared as an enum class or an element of one.
        const ENUM = 0x4000;
    }
}

impl AccessFlags {
    /// Extracts the flags from a raw class-file access mask.
    ///
    /// Unknown bits are dropped so models built from future class-file
    /// versions still carry the flags this crate understands.
    #[must_use]
    pub fn from_raw(raw: u16) -> Self {
        Self::from_bits_truncate(raw)
    }

    /// Returns true if the `static` bit is set.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.contains(Self::STATIC)
    }

    /// Returns true if none of `public`, `private` or `protected` is set
    /// (package-private visibility).
    #[must_use]
    pub fn is_package_private(&self) -> bool {
        !self.intersects(Self::PUBLIC | Self::PRIVATE | Self::PROTECTED)
    }
}
