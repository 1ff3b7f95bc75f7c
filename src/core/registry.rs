use crate::domain::model::ServiceEntry;
use crate::domain::ports::DeploymentFilter;
use crate::utils::resources::open_scoped;
use std::io::BufRead;
use std::path::Path;

/// 讀取 health-check 設定檔，回傳仍在部署中的服務
///
/// 設定檔讀不到時只記錄錯誤並回傳空清單，不會往上拋。
pub fn load_registry<P, F>(path: P, filter: &F) -> Vec<ServiceEntry>
where
    P: AsRef<Path>,
    F: DeploymentFilter + ?Sized,
{
    let path = path.as_ref();
    match open_scoped(path) {
        Ok(reader) => parse_registry(reader, filter),
        Err(e) => {
            tracing::error!("Cannot read health check file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// `<name>=<healthPathFragment>` per line; blank and `#` lines are skipped.
pub fn parse_registry<R, F>(reader: R, filter: &F) -> Vec<ServiceEntry>
where
    R: BufRead,
    F: DeploymentFilter + ?Sized,
{
    let mut entries = Vec::new();

    // 逐行以 lossy 解碼，單行非 UTF-8 不影響後面的服務
    for line in reader.split(b'\n') {
        let line = match line {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                // 保留已讀到的部分
                tracing::error!("Failed reading health check file: {}", e);
                break;
            }
        };

        let Some((name, health_path)) = parse_line(&line) else {
            continue;
        };

        if filter.is_excluded(health_path) {
            tracing::debug!("Skipping {} ({}): not deployed", name, health_path);
            continue;
        }

        entries.push(ServiceEntry {
            name: name.to_string(),
            health_path: health_path.to_string(),
            info_path: info_path_for(health_path),
        });
    }

    entries
}

/// 解析單行，註解、空行與沒有 `=` 的行回傳 None
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut parts = line.split('=');
    let name = parts.next()?;
    match parts.next() {
        Some(fragment) if !fragment.is_empty() => Some((name, fragment)),
        _ => None,
    }
}

/// health 與 info 端點只差最後一段路徑
pub fn info_path_for(health_path: &str) -> String {
    match health_path.rsplit_once('/') {
        Some((prefix, "health")) => format!("{}/info", prefix),
        None if health_path == "health" => "info".to_string(),
        _ => {
            tracing::debug!(
                "Health path {} does not end with 'health', using it as is",
                health_path
            );
            health_path.to_string()
        }
    }
}
