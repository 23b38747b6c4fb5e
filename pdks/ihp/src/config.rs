//! Loading generator parameters from TOML.
//!
//! Missing keys take the generator's defaults. Shape and layer names are
//! checked before the parameters are deserialized, so that an unknown name is
//! reported as [`crate::Error::InvalidShape`] or [`crate::Error::UnknownLayer`] rather than
//! as a generic configuration error.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::cells::BondpadShape;
use crate::error::Result;
use crate::layers::IhpLayer;

/// Parses generator parameters from a TOML string.
///
/// # Examples
///
/// ```
/// use ihp::cells::{Bondpad, BondpadShape};
///
/// let pad: Bondpad = ihp::config::from_toml_str("shape = \"square\"\ndiameter = 60.0").unwrap();
/// assert_eq!(pad.shape, BondpadShape::Square);
/// assert_eq!(pad.diameter, 60.0);
/// assert_eq!(pad.bbox_offsets, Some(vec![-2.1, 0.0]));
/// ```
pub fn from_toml_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    let table: toml::Table = toml::from_str(s)?;
    validate_names(&table)?;
    Ok(toml::from_str(s)?)
}

/// Reads generator parameters from a TOML file.
pub fn from_toml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading generator parameters");
    let contents = std::fs::read_to_string(path)?;
    from_toml_str(&contents)
}

fn validate_names(table: &toml::Table) -> Result<()> {
    for (key, value) in table {
        let Some(value) = value.as_str() else {
            continue;
        };
        if key == "shape" {
            value.parse::<BondpadShape>()?;
        } else if key.starts_with("layer_") {
            value.parse::<IhpLayer>()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use test_log::test;

    use super::*;
    use crate::cells::{BondpadArray, Inductor};
    use crate::error::Error;

    #[test]
    fn unknown_shape_in_config() {
        let err = from_toml_str::<BondpadArray>("shape = \"triangle\"").unwrap_err();
        assert!(matches!(err, Error::InvalidShape(ref s) if s == "triangle"));
    }

    #[test]
    fn unknown_layer_in_config() {
        let err = from_toml_str::<BondpadArray>("layer_passiv = \"Passivfoo\"").unwrap_err();
        assert!(matches!(err, Error::UnknownLayer(ref s) if s == "Passivfoo"));
    }

    #[test]
    fn malformed_config() {
        let err = from_toml_str::<Inductor>("width = [").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        let err = from_toml_str::<Inductor>("width = \"wide\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn inductor_from_config() {
        let ind: Inductor = from_toml_str(
            r#"
            diameter = 24.68
            turns = 2
            model = "inductor3"
            block_qrc = false
            "#,
        )
        .unwrap();
        assert_eq!(ind.width, 2.0);
        assert_eq!(ind.turns, 2);
        assert!(!ind.block_qrc);
        assert_eq!(ind.model.as_str(), "inductor3");
    }

    #[test]
    fn array_from_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("ihp-config-test-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "n_pads = 3").unwrap();
        writeln!(file, "layer_top_metal = \"topmetal1drawing\"").unwrap();
        writeln!(file, "bbox_offsets = [-1.0]").unwrap();
        drop(file);

        let array: BondpadArray = from_toml_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(array.n_pads, 3);
        assert_eq!(array.layer_top_metal, IhpLayer::TopMetal1Drawing);
        assert_eq!(array.bbox_offsets, Some(vec![-1.0]));
        assert_eq!(array.pad_pitch, 100.0);
    }

    #[test]
    fn missing_file() {
        let err = from_toml_file::<Inductor>("/nonexistent/ihp/params.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
