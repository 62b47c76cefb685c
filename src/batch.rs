// src/batch.rs
use std::path::PathBuf;
use std::sync::Arc;

use crate::parser::{ParseResponse, ResumeParser};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// One input file with its declared type.
#[derive(Debug, Clone)]
pub struct ParseJob {
    pub path: PathBuf,
    pub file_type: String,
}

impl ParseJob {
    pub fn reads_stdin(&self) -> bool {
        self.path.as_os_str() == STDIN_PATH
    }
}

/// Parses every job on the blocking pool, sharing one parser (and its model).
/// Responses come back in job order.
pub async fn parse_all(parser: Arc<ResumeParser>, jobs: &[ParseJob]) -> Vec<ParseResponse> {
    let handles: Vec<_> = jobs
        .iter()
        .cloned()
        .map(|job| {
            let parser = Arc::clone(&parser);
            tokio::task::spawn_blocking(move || {
                tracing::info!("Parsing {} as '{}'", job.path.display(), job.file_type);
                let result = if job.reads_stdin() {
                    parser.parse_reader(std::io::stdin().lock(), &job.file_type)
                } else {
                    parser.parse_file(&job.path, &job.file_type)
                };
                ParseResponse::from(result)
            })
        })
        .collect();

    let mut responses = Vec::with_capacity(handles.len());
    for (handle, job) in handles.into_iter().zip(jobs) {
        let response = match handle.await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Parse task for {} did not complete: {}", job.path.display(), e);
                ParseResponse::Failed { error: format!("Parse task failed: {}", e) }
            }
        };
        responses.push(response);
    }
    responses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::ParserConfig;
    use std::io::Write;

    fn job(path: PathBuf, file_type: &str) -> ParseJob {
        ParseJob { path, file_type: file_type.to_string() }
    }

    #[test]
    fn test_responses_follow_job_order() {
        let mut first = tempfile::NamedTempFile::new().unwrap();
        writeln!(first, "Jane Roe\njane@example.com").unwrap();
        let mut second = tempfile::NamedTempFile::new().unwrap();
        writeln!(second, "John Doe\njohn@example.com").unwrap();

        let jobs = vec![
            job(first.path().to_path_buf(), "txt"),
            job(PathBuf::from("/no/such/file.xyz"), "xyz"),
            job(second.path().to_path_buf(), "plain"),
            job(PathBuf::from("/no/such/file.pdf"), "pdf"),
        ];
        let parser = Arc::new(ResumeParser::with_default_model(ParserConfig::default()));

        let responses = tokio_test::block_on(parse_all(parser, &jobs));

        assert_eq!(responses.len(), 4);
        match &responses[0] {
            ParseResponse::Parsed(resume) => assert_eq!(resume.name, "Jane Roe"),
            other => panic!("expected parsed record, got {:?}", other),
        }
        assert_eq!(
            responses[1],
            ParseResponse::Failed { error: "Unsupported file type".to_string() }
        );
        match &responses[2] {
            ParseResponse::Parsed(resume) => assert_eq!(resume.name, "John Doe"),
            other => panic!("expected parsed record, got {:?}", other),
        }
        assert_eq!(
            responses[3],
            ParseResponse::Failed { error: "Could not extract text from file".to_string() }
        );
    }

    #[test]
    fn test_dash_means_stdin() {
        assert!(job(PathBuf::from(STDIN_PATH), "txt").reads_stdin());
        assert!(!job(PathBuf::from("./-"), "txt").reads_stdin());
        assert!(!job(PathBuf::from("resume.txt"), "txt").reads_stdin());
    }

    #[test]
    fn test_empty_batch() {
        let parser = Arc::new(ResumeParser::with_default_model(ParserConfig::default()));
        let responses = tokio_test::block_on(parse_all(parser, &[]));
        assert!(responses.is_empty());
    }
}
