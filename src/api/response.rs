use serde::Deserialize;
use serde_with::{VecSkipError, serde_as};

use crate::prelude::*;

/// Report response: either the bare rows, or the rows wrapped into the standard envelope.
///
/// Rows which fail to deserialize are skipped.
#[derive(Deserialize)]
#[serde(untagged, bound(deserialize = "R: Deserialize<'de>"))]
pub enum Response<R> {
    Bare(Rows<R>),
    Envelope(Envelope<R>),
}

#[serde_as]
#[derive(Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
pub struct Rows<R>(#[serde_as(as = "VecSkipError<_>")] pub Vec<R>);

#[serde_as]
#[derive(Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
pub struct Envelope<R> {
    /// Absent flag means success.
    #[serde(default)]
    success: Option<bool>,

    #[serde(default)]
    message: Option<String>,

    #[serde_as(as = "Option<VecSkipError<_>>")]
    #[serde(default)]
    data: Option<Vec<R>>,
}

impl<R> From<Response<R>> for Result<Vec<R>> {
    fn from(response: Response<R>) -> Self {
        match response {
            Response::Bare(rows) => Ok(rows.0),
            Response::Envelope(envelope) if envelope.success.unwrap_or(true) => {
                Ok(envelope.data.unwrap_or_default())
            }
            Response::Envelope(Envelope { message: Some(message), .. }) => {
                bail!(r#"backend error ("{message}")"#)
            }
            Response::Envelope(_) => bail!("backend error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::UsageRow;

    fn parse(body: &str) -> Result<Vec<UsageRow>> {
        serde_json::from_str::<Response<UsageRow>>(body)?.into()
    }

    #[test]
    fn test_bare_ok() -> Result {
        // language=JSON
        let rows = parse(r#"[{ "stationId": 1, "totalBookings": 3 }, null, { "stationId": 2 }]"#)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total_bookings, 3);
        Ok(())
    }

    #[test]
    fn test_envelope_ok() -> Result {
        // language=JSON
        let rows = parse(
            r#"
            {
                "success": true,
                "message": "OK",
                "data": [{ "stationId": 1, "completedSessions": 2 }]
            }
        "#,
        )?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].completed_sessions, 2);
        Ok(())
    }

    #[test]
    fn test_envelope_without_data() -> Result {
        assert!(parse(r#"{ "success": true, "data": null }"#)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_envelope_failure() {
        let error = parse(r#"{ "success": false, "message": "Token hết hạn" }"#).unwrap_err();
        assert_eq!(error.to_string(), r#"backend error ("Token hết hạn")"#);
        assert!(parse(r#"{ "success": false }"#).is_err());
    }
}
