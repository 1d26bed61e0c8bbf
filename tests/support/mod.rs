#![allow(dead_code)]

use async_trait::async_trait;
use pdf_expert::{build_router, serve, AppState, Metrics, StagingArea, TextExtractor};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub const DEFAULT_MAX_UPLOAD: usize = 10 * 1024 * 1024;

pub struct TestServer<E: TextExtractor> {
    pub base_url: String,
    pub state: AppState<E>,
    pub staging_dir: TempDir,
    pub client: reqwest::Client,
}

impl<E: TextExtractor> TestServer<E> {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn staged_files(&self) -> usize {
        std::fs::read_dir(self.staging_dir.path()).unwrap().count()
    }

    pub async fn upload(&self, file_name: &str, data: Vec<u8>) -> reqwest::Response {
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .unwrap();
        let form = reqwest::multipart::Form::new().part("file", part);

        self.client
            .post(self.url("/analyze"))
            .multipart(form)
            .send()
            .await
            .unwrap()
    }
}

pub async fn spawn_server<E: TextExtractor + 'static>(extractor: E) -> TestServer<E> {
    spawn_server_with(extractor, None, DEFAULT_MAX_UPLOAD).await
}

/// Starts the real router on an ephemeral port. `staging_subdir` points the
/// staging area at a path inside the temp dir that may not exist.
pub async fn spawn_server_with<E: TextExtractor + 'static>(
    extractor: E,
    staging_subdir: Option<&str>,
    max_upload_bytes: usize,
) -> TestServer<E> {
    let staging_dir = TempDir::new().unwrap();
    let staging_path = match staging_subdir {
        Some(sub) => staging_dir.path().join(sub),
        None => staging_dir.path().to_path_buf(),
    };

    let state = AppState::new(
        extractor,
        StagingArea::new(staging_path),
        Arc::new(Metrics::new().unwrap()),
    );
    let router = build_router(state.clone(), max_upload_bytes);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        serve(listener, router, std::future::pending()).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
        state,
        staging_dir,
        client: reqwest::Client::new(),
    }
}

/// Reads the staged upload back as UTF-8, so each response reflects only the
/// bytes its own request sent.
pub struct FileTextExtractor;

#[async_trait]
impl TextExtractor for FileTextExtractor {
    async fn extract_text(&self, path: &Path) -> pdf_expert::Result<String> {
        let bytes = tokio::fs::read(path).await?;
        String::from_utf8(bytes).map_err(|e| pdf_expert::AnalyzerError::extraction(e.to_string()))
    }
}

pub struct PanickingExtractor;

#[async_trait]
impl TextExtractor for PanickingExtractor {
    async fn extract_text(&self, _path: &Path) -> pdf_expert::Result<String> {
        panic!("extractor exploded")
    }
}

/// Builds a one-page PDF that draws each line with Helvetica.
pub fn minimal_pdf(lines: &[&str]) -> Vec<u8> {
    let mut content = String::from("BT\n/F1 18 Tf\n72 720 Td\n");
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            content.push_str("0 -28 Td\n");
        }
        let escaped = line
            .replace('\\', "\\\\")
            .replace('(', "\\(")
            .replace(')', "\\)");
        content.push_str(&format!("({}) Tj\n", escaped));
    }
    content.push_str("ET\n");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    pdf
}
