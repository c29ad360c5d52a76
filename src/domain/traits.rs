// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer asks for variants through a trait so
// the dataset can come from the compiled-in table, a JSON
// file, or a test fixture without changing the use cases.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::variant::Variant;

// ─── VariantSource ────────────────────────────────────────────────────────────
/// Any component that can supply the ordered list of variants.
///
/// Implementations:
///   - BuiltinVariants → the compiled-in comparison table
///   - JsonVariantFile → a JSON array on disk
pub trait VariantSource {
    /// Load every variant, in plotting order.
    fn load_all(&self) -> Result<Vec<Variant>>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

/// In-memory variants, already loaded.
impl VariantSource for Vec<Variant> {
    fn load_all(&self) -> Result<Vec<Variant>> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory variants", self.len())
    }
}
