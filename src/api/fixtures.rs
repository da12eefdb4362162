use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    api::{Report, ReportQuery, ReportSource},
    prelude::*,
};

/// Directory of the reports saved earlier, one `<report>.json` file per report.
///
/// Saved reports are already filtered, so the query is ignored.
pub struct Directory(pub PathBuf);

#[async_trait]
impl ReportSource for Directory {
    #[instrument(skip_all, fields(report = %report, path = %self.0.display()))]
    async fn fetch(&self, report: Report, _query: &ReportQuery) -> Result<Value> {
        let path = self.0.join(report.file_name());
        match tokio::fs::read(&path).await {
            Ok(contents) => serde_json::from_slice(&contents)
                .with_context(|| format!("failed to parse `{}`", path.display())),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                warn!("no saved report, assuming empty");
                Ok(Value::Array(Vec::new()))
            }
            Err(error) => Err(error).with_context(|| format!("failed to read `{}`", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_saved_report() -> Result {
        let directory = tempfile::tempdir()?;
        // language=JSON
        std::fs::write(
            directory.path().join("revenue.json"),
            r#"{ "success": true, "data": [{ "stationId": 1, "year": 2024, "month": 5, "totalRevenue": 42000 }] }"#,
        )?;
        let source = Directory(directory.path().to_path_buf());
        let rows = source.get_revenue(&ReportQuery::default()).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, Some(2024));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_report_is_empty() -> Result {
        let directory = tempfile::tempdir()?;
        let source = Directory(directory.path().to_path_buf());
        assert!(source.get_peak_hours(&ReportQuery::default()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_report_fails() -> Result {
        let directory = tempfile::tempdir()?;
        std::fs::write(directory.path().join("usage.json"), "{ not json")?;
        let source = Directory(directory.path().to_path_buf());
        assert!(source.get_usage(&ReportQuery::default()).await.is_err());
        Ok(())
    }
}
