// ============================================================
// Layer 4 — Built-in Variant Table
// ============================================================
// The six inpainting variants from the results table, in the
// order they were developed. The last one is the final model
// and its size is the default x-axis reference.
//
//   name                                  P (M)    FID      SSIM
//   Feature-based                         16.6     65.63    0.03
//   Resolution-based                      0.46     60.23    0.18
//   Masked Downshuffle                    0.76     35.6     0.892
//   UNet                                  125.0    19.23    0.928
//   Denoised LaMa + UNet                  125.2    18.43    0.9398
//   Final (LaMa + MAT + UNet + denoiser)  125.3    0.9873   0.9764

use anyhow::Result;

use crate::domain::traits::VariantSource;
use crate::domain::variant::Variant;

/// The compiled-in comparison table, in plotting order.
pub fn builtin_variants() -> Vec<Variant> {
    vec![
        Variant::new("Feature-based",                        16.6,  65.63,  0.03),
        Variant::new("Resolution-based",                     0.46,  60.23,  0.18),
        Variant::new("Masked Downshuffle",                   0.76,  35.6,   0.892),
        Variant::new("UNet",                                 125.0, 19.23,  0.928),
        Variant::new("Denoised LaMa + UNet",                 125.2, 18.43,  0.9398),
        Variant::new("Final (LaMa + MAT + UNet + denoiser)", 125.3, 0.9873, 0.9764),
    ]
}

/// VariantSource over the compiled-in table.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinVariants;

impl VariantSource for BuiltinVariants {
    fn load_all(&self) -> Result<Vec<Variant>> {
        Ok(builtin_variants())
    }

    fn describe(&self) -> String {
        "built-in comparison table".to_string()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::variant::validate_all;

    #[test]
    fn test_builtin_table_is_valid() {
        let variants = BuiltinVariants.load_all().unwrap();
        assert_eq!(variants.len(), 6);
        assert!(validate_all(&variants).is_ok());
    }

    #[test]
    fn test_final_variant_is_last() {
        let variants = builtin_variants();
        assert!(variants.last().unwrap().name.starts_with("Final"));
        assert_eq!(variants.last().unwrap().size_metric, 125.3);
    }
}
