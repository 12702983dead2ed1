//! Fetches the source texts from the network or the local file system.

use std::{fmt, io::Read, path::PathBuf};

use flate2::read::GzDecoder;
use futures::try_join;
use tracing::{info, warn};

use crate::error::PipelineError;

/// Which of the two datasets a source holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Weather,
    WaterQuality,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Weather => write!(f, "weather"),
            SourceKind::WaterQuality => write!(f, "water quality"),
        }
    }
}

/// Where a source text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// Treats `http://` and `https://` locations as URLs and anything else as a path.
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Source::Url(location.to_string())
        } else {
            Source::File(PathBuf::from(location))
        }
    }

    fn is_gzip(&self) -> bool {
        match self {
            Source::Url(url) => url
                .split(|c: char| c == '?' || c == '#')
                .next()
                .unwrap_or(url)
                .ends_with(".gz"),
            Source::File(path) => path.extension().map_or(false, |ext| ext == "gz"),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches one source as text, gunzipping `.gz` content.
pub async fn fetch_text(source: &Source, kind: SourceKind) -> Result<String, PipelineError> {
    let bytes = match source {
        Source::Url(url) => download(url, kind).await?,
        Source::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| PipelineError::unavailable(kind, format!("{}: {}", source, e)))?,
    };

    let text = if source.is_gzip() {
        gunzip(&bytes).map_err(|e| PipelineError::unavailable(kind, format!("{}: {}", source, e)))?
    } else {
        String::from_utf8_lossy(&bytes).into_owned()
    };

    info!(source = %kind, location = %source, bytes = bytes.len(), "fetched source");
    Ok(text)
}

/// Fetches both sources concurrently; fails if either fails.
pub async fn fetch_sources(
    weather: &Source,
    water_quality: &Source,
) -> Result<(String, String), PipelineError> {
    try_join!(
        fetch_text(weather, SourceKind::Weather),
        fetch_text(water_quality, SourceKind::WaterQuality)
    )
    .map_err(|e| {
        warn!("source fetch failed: {}", e);
        e
    })
}

async fn download(url: &str, kind: SourceKind) -> Result<Vec<u8>, PipelineError> {
    let response = reqwest::get(url).await.map_err(|e| {
        PipelineError::unavailable(kind, format!("Failed to download {}: {}", url, e))
    })?;

    if !response.status().is_success() {
        return Err(PipelineError::unavailable(
            kind,
            format!("Failed to download {}: {}", url, response.status()),
        ));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| PipelineError::unavailable(kind, format!("Error reading {}: {}", url, e)))?;

    Ok(bytes.to_vec())
}

fn gunzip(bytes: &[u8]) -> std::io::Result<String> {
    let mut text = String::new();
    GzDecoder::new(bytes).read_to_string(&mut text)?;

    Ok(text)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{write::GzEncoder, Compression};
    use tempfile::TempDir;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    // Answers a single HTTP request on a local port with `response`.
    async fn serve_once(path: &str, response: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(&response).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/{}", addr, path)
    }

    fn http_response(status: &str, body: &[u8]) -> Vec<u8> {
        let mut response = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);
        response
    }

    #[test]
    fn should_classify_locations() {
        assert_eq!(
            Source::from_location("https://example.org/weather.csv"),
            Source::Url("https://example.org/weather.csv".to_string())
        );
        assert_eq!(
            Source::from_location("data/weather.csv"),
            Source::File(PathBuf::from("data/weather.csv"))
        );
    }

    #[test]
    fn should_detect_gzip_sources() {
        assert!(Source::from_location("weather.csv.gz").is_gzip());
        assert!(Source::from_location("https://example.org/w.csv.gz?token=1").is_gzip());
        assert!(!Source::from_location("weather.csv").is_gzip());
    }

    #[tokio::test]
    async fn should_read_local_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("weather.csv");
        std::fs::write(&path, "time,Ktemp\n2020-01-01,280\n").unwrap();

        let text = fetch_text(&Source::File(path), SourceKind::Weather)
            .await
            .unwrap();

        assert!(text.starts_with("time,Ktemp"));
    }

    #[tokio::test]
    async fn should_gunzip_compressed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("weather.csv.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"time,Ktemp\n2020-01-01,280\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let text = fetch_text(&Source::File(path), SourceKind::Weather)
            .await
            .unwrap();

        assert_eq!(text, "time,Ktemp\n2020-01-01,280\n");
    }

    #[tokio::test]
    async fn should_report_missing_file_as_unavailable() {
        let err = fetch_text(
            &Source::File(PathBuf::from("/nonexistent/water.csv")),
            SourceKind::WaterQuality,
        )
        .await
        .unwrap_err();

        assert!(err.is_data_unavailable());
        assert!(err.to_string().starts_with("water quality data unavailable"));
    }

    #[tokio::test]
    async fn should_download_url_body() {
        let body = b"Sample Date,Turbidity (NTU)\n06/15/2020,0.10\n";
        let url = serve_once("water.csv", http_response("200 OK", body)).await;

        let text = fetch_text(&Source::Url(url), SourceKind::WaterQuality)
            .await
            .unwrap();

        assert_eq!(text, "Sample Date,Turbidity (NTU)\n06/15/2020,0.10\n");
    }

    #[tokio::test]
    async fn should_gunzip_compressed_download() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"time,Ktemp\n2020-01-01,280\n").unwrap();
        let body = encoder.finish().unwrap();
        let url = serve_once("weather.csv.gz", http_response("200 OK", &body)).await;

        let text = fetch_text(&Source::Url(url), SourceKind::Weather)
            .await
            .unwrap();

        assert_eq!(text, "time,Ktemp\n2020-01-01,280\n");
    }

    #[tokio::test]
    async fn should_report_http_error_status_as_unavailable() {
        let url = serve_once("water.csv", http_response("404 Not Found", b"not found")).await;

        let err = fetch_text(&Source::Url(url), SourceKind::WaterQuality)
            .await
            .unwrap_err();

        assert!(err.is_data_unavailable());
        assert!(matches!(
            err,
            PipelineError::SourceUnavailable {
                kind: SourceKind::WaterQuality,
                ..
            }
        ));
        assert!(err.to_string().contains("404"));
    }
}
