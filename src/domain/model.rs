use std::fmt;

/// health-check 設定檔中的一筆服務
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub name: String,
    pub health_path: String,
    pub info_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub commit_id: String,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Group: {}, Artifact: {}, version: {}, Commit ID: {}",
            self.group, self.artifact, self.version, self.commit_id
        )
    }
}

/// 單一服務 info 查詢的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoOutcome {
    Build(BuildInfo),
    NoResponse { url: String },
}

impl fmt::Display for InfoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoOutcome::Build(info) => info.fmt(f),
            InfoOutcome::NoResponse { url } => write!(f, "{}- No Response", url),
        }
    }
}
