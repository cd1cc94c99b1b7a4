//! Force-system input documents (JSON or CSV).
//!
//! - JSON: `{ "vectors": [{"p1": [x, y], "p2": [x, y]}, ...], "arc": [[x, y], ...] }`,
//!   or a bare array of vectors. `arc` is optional.
//! - CSV: header `x1,y1,x2,y2`, one force per row, in tooth order.

use anyhow::{anyhow, bail, Context, Result};
use funicular::{ArcPath, Line2};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What the CLI reads and what `sample` writes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputDoc {
    pub vectors: Vec<Line2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc: Option<ArcPath>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonInput {
    Doc(InputDoc),
    Bare(Vec<Line2>),
}

pub fn load(path: &Path) -> Result<InputDoc> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => Ok(InputDoc {
            vectors: load_csv(path)?,
            arc: None,
        }),
        Some("json") => load_json(path),
        other => bail!("unsupported input extension {:?} (want .json or .csv)", other),
    }
}

pub fn load_arc(path: &Path) -> Result<ArcPath> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing arc {}", path.display()))
}

fn load_json(path: &Path) -> Result<InputDoc> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let parsed: JsonInput =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(match parsed {
        JsonInput::Doc(doc) => doc,
        JsonInput::Bare(vectors) => InputDoc { vectors, arc: None },
    })
}

fn load_csv(path: &Path) -> Result<Vec<Line2>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let column = |name: &str| -> Result<Vec<f64>> {
        let series = df
            .column(name)
            .with_context(|| format!("missing column {name}"))?
            .cast(&DataType::Float64)?;
        series
            .f64()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.ok_or_else(|| anyhow!("row {}: empty {name}", row + 1)))
            .collect()
    };
    let (x1, y1, x2, y2) = (column("x1")?, column("y1")?, column("x2")?, column("y2")?);
    Ok((0..x1.len())
        .map(|i| Line2::from_coords(x1[i], y1[i], x2[i], y2[i]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_doc_and_bare_array() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("doc.json");
        fs::write(
            &doc,
            r#"{"vectors":[{"p1":[1,2],"p2":[3,4]}],"arc":[[0,0],[10,5]]}"#,
        )
        .unwrap();
        let parsed = load(&doc).unwrap();
        assert_eq!(parsed.vectors, vec![Line2::from_coords(1.0, 2.0, 3.0, 4.0)]);
        assert_eq!(parsed.arc.unwrap().points.len(), 2);

        let bare = dir.path().join("bare.json");
        fs::write(&bare, r#"[{"p1":[1,2],"p2":[3,4]},{"p1":[5,6],"p2":[7,8]}]"#).unwrap();
        let parsed = load(&bare).unwrap();
        assert_eq!(parsed.vectors.len(), 2);
        assert!(parsed.arc.is_none());
    }

    #[test]
    fn csv_rows_become_vectors_in_order() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("units.csv");
        fs::write(
            &csv,
            "x1,y1,x2,y2\n247.31,690.76,205.51,647.27\n271.03,613.94,217.94,570.45\n",
        )
        .unwrap();
        let v = load(&csv).unwrap().vectors;
        assert_eq!(v.len(), 2);
        assert_eq!(v[0], Line2::from_coords(247.31, 690.76, 205.51, 647.27));
        assert_eq!(v[1].p1.x, 271.03);
    }

    #[test]
    fn unknown_extension_is_an_error() {
        assert!(load(Path::new("forces.txt")).is_err());
    }
}
