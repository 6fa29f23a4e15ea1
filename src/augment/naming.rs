//! Augmented filename derivation
//!
//! The dataset's naming grammar is
//! `<char>_s<subject>v<version>n<sample>p<filter><augmentation><features>.csv`
//! where `a0` marks unaugmented data. An augmented variant replaces the
//! first `a0` in the stem with `a<axis><signed-angle>`, e.g.
//! `A_s01v01n0001p0a0f0.csv` -> `A_s01v01n0001p0ax+30f0.csv`.

use crate::error::{AiraugError, Result};
use crate::types::RotationSpec;

/// Marker token for unaugmented data in the naming grammar
const UNAUGMENTED_TOKEN: &str = "a0";

/// Derive the augmented filename for `spec`, preserving the extension.
///
/// Fails when the stem carries no `a0` token: appending instead would
/// break downstream parsers that rely on positional token layout.
pub fn augmented_filename(original: &str, spec: &RotationSpec) -> Result<String> {
    let (stem, ext) = match original.rfind('.') {
        // A leading dot is a hidden file, not an extension
        Some(pos) if pos > 0 => original.split_at(pos),
        _ => (original, ""),
    };

    if !stem.contains(UNAUGMENTED_TOKEN) {
        return Err(AiraugError::Naming {
            filename: original.to_string(),
        });
    }

    let replacement = format!("a{}", spec.token());
    Ok(format!(
        "{}{}",
        stem.replacen(UNAUGMENTED_TOKEN, &replacement, 1),
        ext
    ))
}
