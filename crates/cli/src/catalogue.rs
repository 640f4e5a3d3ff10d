use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};
use stringart::patterns::{
    CircleParams, ConcentricParams, FlowerParams, PatternSpec, PolygonParams, SquarePlusParams,
    StarParams,
};

/// One template: its name, output file name, and pattern parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub file: String,
    #[serde(flatten)]
    pub spec: PatternSpec,
}

impl Entry {
    fn new(name: &str, spec: PatternSpec) -> Self {
        Self {
            name: name.to_string(),
            file: format!("{name}.svg"),
            spec,
        }
    }
}

fn polygon(sides: usize, side_length: f64, num_holes: usize, gap_in_steps: f64) -> PatternSpec {
    PatternSpec::Polygon(PolygonParams {
        hole_radius: 0.65,
        slit_length: 3.0,
        gap_in_steps,
        ..PolygonParams::new(sides, side_length, num_holes)
    })
}

/// The standard set of boards.
pub fn builtin() -> Vec<Entry> {
    let circles = [
        ("C09", 25.0, 9),
        ("C12", 27.5, 12),
        ("C18", 30.0, 18),
        ("C24", 35.0, 24),
        ("C30", 40.0, 30),
        ("C40", 45.0, 40),
        ("C50", 50.0, 50),
        ("C60", 60.0, 60),
        ("C80", 80.0, 80),
    ];
    let mut out: Vec<Entry> = circles
        .iter()
        .map(|&(name, radius, n)| Entry::new(name, PatternSpec::Circle(CircleParams::new(radius, n))))
        .collect();
    out.extend([
        Entry::new("P3", polygon(3, 90.0, 12, 2.0)),
        Entry::new("P4", polygon(4, 60.0, 12, 2.0)),
        Entry::new("P6", polygon(6, 45.0, 10, 1.25)),
    ]);
    for n in [5, 6, 8] {
        out.push(Entry::new(
            &format!("S{n}"),
            PatternSpec::Star(StarParams::new(45.0, n, 10)),
        ));
    }
    for n in [6, 8] {
        out.push(Entry::new(
            &format!("F{n}"),
            PatternSpec::Flower(FlowerParams::new(45.0, n, 10)),
        ));
    }
    out.push(Entry::new(
        "CC36",
        PatternSpec::Concentric(ConcentricParams::new(45.0, 36, 18)),
    ));
    out.push(Entry::new(
        "SQ5",
        PatternSpec::SquarePlus(SquarePlusParams::new(80.0, 5)),
    ));
    out
}

/// Read a JSON array of entries.
///
/// Names and files must be unique, and every file must be a relative path
/// that stays below the output directory.
pub fn load(path: &Path) -> Result<Vec<Entry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading catalogue {}", path.display()))?;
    let entries: Vec<Entry> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalogue {}", path.display()))?;
    let mut names = HashSet::new();
    let mut files = HashSet::new();
    for e in &entries {
        if !names.insert(e.name.as_str()) {
            bail!("duplicate template name {:?} in {}", e.name, path.display());
        }
        let file = Path::new(&e.file);
        let plain = file.components().next().is_some()
            && file.components().all(|c| matches!(c, Component::Normal(_)));
        if !plain {
            bail!(
                "template {:?}: file {:?} must be a relative path without `..`",
                e.name,
                e.file
            );
        }
        if !files.insert(e.file.as_str()) {
            bail!("duplicate output file {:?} in {}", e.file, path.display());
        }
    }
    Ok(entries)
}

/// Keep only the entries named in `only` (all of them when empty).
pub fn select(entries: Vec<Entry>, only: &[String]) -> Result<Vec<Entry>> {
    if only.is_empty() {
        return Ok(entries);
    }
    for name in only {
        if !entries.iter().any(|e| &e.name == name) {
            bail!("unknown template {name:?}");
        }
    }
    Ok(entries
        .into_iter()
        .filter(|e| only.contains(&e.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builtin_entries_all_build() {
        let entries = builtin();
        assert_eq!(entries.len(), 20);
        for e in &entries {
            let shape = e.spec.build().unwrap_or_else(|err| panic!("{}: {err}", e.name));
            assert!(shape.primitive_count() > 1, "{} is empty", e.name);
            assert_eq!(e.file, format!("{}.svg", e.name));
        }
        let names: HashSet<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn load_round_trips_builtin_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalogue.json");
        fs::write(&path, serde_json::to_vec_pretty(&builtin()).unwrap()).unwrap();
        assert_eq!(load(&path).unwrap(), builtin());
    }

    #[test]
    fn load_applies_defaults_and_rejects_duplicates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("c.json");
        fs::write(
            &path,
            r#"[{"name": "X", "file": "x.svg", "pattern": "circle", "radius": 25, "num_holes": 9}]"#,
        )
        .unwrap();
        let entries = load(&path).unwrap();
        assert_eq!(
            entries[0].spec,
            PatternSpec::Circle(CircleParams::new(25.0, 9))
        );

        fs::write(
            &path,
            r#"[{"name": "X", "file": "a.svg", "pattern": "star", "radius": 45, "spokes": 5, "num_holes": 10},
                {"name": "X", "file": "b.svg", "pattern": "star", "radius": 45, "spokes": 6, "num_holes": 10}]"#,
        )
        .unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn load_rejects_shared_and_escaping_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("c.json");
        let entry = |name: &str, file: &str| {
            format!(
                r#"{{"name": "{name}", "file": "{file}", "pattern": "circle", "radius": 25, "num_holes": 9}}"#
            )
        };
        let cases = [
            (vec![entry("A", "x.svg"), entry("B", "x.svg")], "duplicate output file"),
            (vec![entry("A", "/tmp/x.svg")], "relative path"),
            (vec![entry("A", "../x.svg")], "relative path"),
            (vec![entry("A", "sub/../../x.svg")], "relative path"),
            (vec![entry("A", "")], "relative path"),
        ];
        for (items, needle) in cases {
            fs::write(&path, format!("[{}]", items.join(","))).unwrap();
            let err = load(&path).unwrap_err().to_string();
            assert!(err.contains(needle), "{items:?}: {err}");
        }

        fs::write(&path, format!("[{}]", entry("A", "boards/a.svg"))).unwrap();
        assert_eq!(load(&path).unwrap()[0].file, "boards/a.svg");
    }

    #[test]
    fn select_filters_and_reports_unknown_names() {
        let picked = select(builtin(), &["P3".to_string(), "S8".to_string()]).unwrap();
        let names: Vec<_> = picked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["P3", "S8"]);
        assert_eq!(select(builtin(), &[]).unwrap().len(), 20);
        assert!(select(builtin(), &["nope".to_string()]).is_err());
    }
}
