use crate::config::IdeOverrides;
use crate::core::project::ProjectType;
use crate::platform::Platform;
use std::path::{Path, PathBuf};

/// Display name used when no install can be discovered. `open -a` resolves
/// it through Launch Services on macOS.
pub const DEFAULT_PRODUCT_NAME: &str = "IntelliJ IDEA";

const WINDOWS_DEFAULT_PATH: &str = r"C:\Program Files\JetBrains\IntelliJ IDEA\bin\idea64.exe";

/// Bare command assumed to be on PATH everywhere else.
const PATH_FALLBACK_COMMAND: &str = "idea";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeFamily {
    IntelliJ,
    PyCharm,
}

const INTELLIJ_BUNDLES: &[&str] = &[
    "IDEA.app",
    "IntelliJ IDEA.app",
    "IntelliJ IDEA CE.app",
    "IntelliJ IDEA Ultimate.app",
    "IntelliJ IDEA Community Edition.app",
];

const PYCHARM_BUNDLES: &[&str] = &[
    "PyCharm Community Edition.app",
    "PyCharm Professional Edition.app",
];

impl IdeFamily {
    pub fn display_name(self) -> &'static str {
        match self {
            IdeFamily::IntelliJ => "IntelliJ IDEA",
            IdeFamily::PyCharm => "PyCharm",
        }
    }

    /// Launcher command JetBrains installs on PATH for this family.
    pub fn command(self) -> &'static str {
        match self {
            IdeFamily::IntelliJ => "idea",
            IdeFamily::PyCharm => "pycharm",
        }
    }

    fn bundles(self) -> &'static [&'static str] {
        match self {
            IdeFamily::IntelliJ => INTELLIJ_BUNDLES,
            IdeFamily::PyCharm => PYCHARM_BUNDLES,
        }
    }
}

/// Pick the IDE family from the observed context. A Python signal wins over
/// a Java signal; no signal at all means no family preference can be
/// inferred.
pub fn ide_family(file_type: Option<&str>, project_type: ProjectType) -> Option<IdeFamily> {
    if project_type == ProjectType::Python || file_type == Some("py") {
        Some(IdeFamily::PyCharm)
    } else if project_type == ProjectType::Java || file_type == Some("java") {
        Some(IdeFamily::IntelliJ)
    } else {
        None
    }
}

/// Ordered install candidates for a family on macOS: system-wide bundles
/// first, then the user-local copies in the same product order.
pub fn install_candidates(family: IdeFamily, home: &Path) -> Vec<PathBuf> {
    let roots = [PathBuf::from("/Applications"), home.join("Applications")];
    roots
        .iter()
        .flat_map(|root| family.bundles().iter().map(move |bundle| root.join(bundle)))
        .collect()
}

/// First existing install candidate, if any.
pub fn probe_install(family: IdeFamily, home: &Path) -> Option<PathBuf> {
    install_candidates(family, home)
        .into_iter()
        .find(|candidate| candidate.exists())
}

/// Resolve the IDE to launch: explicit configuration first, then
/// platform-specific discovery, then a generic fallback.
///
/// A Python context always goes through the PyCharm override slot, even when
/// it is unset; it never falls back to the generic IDE override. With no
/// family signal at all the install probe is skipped and the generic product
/// name is returned.
pub fn resolve_ide_path(
    file_type: Option<&str>,
    project_type: ProjectType,
    overrides: &IdeOverrides,
    platform: Platform,
    home: &Path,
) -> String {
    let family = ide_family(file_type, project_type);

    let configured = match family {
        Some(IdeFamily::PyCharm) => overrides.pycharm_path.clone(),
        Some(IdeFamily::IntelliJ) => {
            if overrides.use_idea_eap && overrides.eap_idea_path.is_some() {
                overrides.eap_idea_path.clone()
            } else {
                overrides.idea_path.clone()
            }
        }
        None => overrides.idea_path.clone(),
    };

    if let Some(path) = configured {
        return path;
    }

    match platform {
        Platform::MacOS => match family {
            Some(family) => probe_install(family, home)
                .map(|path| path.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
            None => DEFAULT_PRODUCT_NAME.to_string(),
        },
        Platform::Windows => WINDOWS_DEFAULT_PATH.to_string(),
        Platform::Linux => PATH_FALLBACK_COMMAND.to_string(),
    }
}
