use std::fs;
use std::path::Path;

/// Ecosystem a workspace belongs to, as far as the launcher cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Python,
    Java,
    Unknown,
}

const PYTHON_MARKERS: &[&str] = &["requirements.txt", "setup.py", "Pipfile", "pyproject.toml"];
const JAVA_MARKERS: &[&str] = &["pom.xml", "build.gradle", "gradlew", ".classpath"];

/// Extension counting stops as soon as either count passes this threshold.
const COUNT_SHORT_CIRCUIT: usize = 5;

/// Classify a workspace root as a Python or Java project.
///
/// Marker files always win over extension counting, and Python markers are
/// checked before Java markers. When no marker is present the top-level
/// entries of the root are counted by extension; the scan is deliberately
/// non-recursive to keep the check cheap on large trees. A tie, an empty
/// directory, or a listing failure all degrade to `Unknown`.
pub fn classify_project(root: &Path) -> ProjectType {
    if PYTHON_MARKERS.iter().any(|m| root.join(m).exists()) {
        return ProjectType::Python;
    }

    if JAVA_MARKERS.iter().any(|m| root.join(m).exists()) {
        return ProjectType::Java;
    }

    match fs::read_dir(root) {
        Ok(entries) => classify_by_extension(
            entries
                .flatten()
                .map(|entry| entry.file_name().to_string_lossy().into_owned()),
        ),
        Err(e) => {
            tracing::warn!("failed to list {} for classification: {}", root.display(), e);
            ProjectType::Unknown
        }
    }
}

fn classify_by_extension<I>(names: I) -> ProjectType
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut java_count = 0usize;
    let mut python_count = 0usize;

    for name in names {
        let name = name.as_ref();
        if name.ends_with(".java") {
            java_count += 1;
        } else if name.ends_with(".py") {
            python_count += 1;
        }

        if java_count > COUNT_SHORT_CIRCUIT {
            return ProjectType::Java;
        }
        if python_count > COUNT_SHORT_CIRCUIT {
            return ProjectType::Python;
        }
    }

    match java_count.cmp(&python_count) {
        std::cmp::Ordering::Greater => ProjectType::Java,
        std::cmp::Ordering::Less => ProjectType::Python,
        std::cmp::Ordering::Equal => ProjectType::Unknown,
    }
}
