use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every candidate YAML file under `root`, recursively.
///
/// Matching is a literal, case-sensitive suffix test on the file name. The
/// result lists the `.yml` group first, then the `.yaml` group, each sorted
/// lexicographically so the report order is reproducible run to run.
pub fn collect_yaml_files(root: &Path) -> Vec<PathBuf> {
    let mut yml = Vec::new();
    let mut yaml = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.ends_with(".yml") {
            yml.push(path.to_path_buf());
        } else if name.ends_with(".yaml") {
            yaml.push(path.to_path_buf());
        }
    }

    // Sort by path string rather than by component for cross-platform
    // consistency of the resulting order.
    yml.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    yaml.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));

    let mut files = yml;
    files.extend(yaml);
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "key: value\n").unwrap();
    }

    fn names(root: &Path) -> Vec<String> {
        collect_yaml_files(root)
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn yml_group_precedes_sorted_yaml_group() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.yml", "a.yml", "z.yaml", "m.yaml"] {
            touch(&dir.path().join(name));
        }
        assert_eq!(names(dir.path()), ["a.yml", "b.yml", "m.yaml", "z.yaml"]);
    }

    #[test]
    fn walk_is_recursive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("top.yml"));
        touch(&dir.path().join("sub").join("deeper").join("inner.yaml"));
        assert_eq!(names(dir.path()), ["top.yml", "inner.yaml"]);
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("UPPER.YML"));
        touch(&dir.path().join("mixed.Yaml"));
        touch(&dir.path().join("kept.yml"));
        assert_eq!(names(dir.path()), ["kept.yml"]);
    }

    #[test]
    fn non_yaml_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("config.json"));
        assert!(names(dir.path()).is_empty());
    }
}
