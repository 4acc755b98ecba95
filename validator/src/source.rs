//! Source resolution and fetching.
//!
//! Every document the validator reads (component, profiles, ontologies) is
//! addressed by a URL. Command-line arguments are resolved against the
//! working directory, `extends` and ontology references against the profile
//! that declares them. `file:` URLs are read from disk; `http:`/`https:` URLs
//! are fetched with a bounded timeout and retried with exponential backoff
//! when the failure looks transient.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

use crate::config::ValidatorConfig;
use crate::error::{Result, ValidatorError};

/// `Accept` header for XML documents (components and profiles).
pub const XML_ACCEPT: &str = "application/xml, text/xml;q=0.9, */*;q=0.1";

/// `Accept` header for ontologies: RDF/XML preferred, generic XML as fallback.
pub const RDF_ACCEPT: &str = "application/rdf+xml, application/xml;q=0.9, text/turtle;q=0.5";

/// A fetched document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// Where the content came from.
    pub location: Url,
    /// The decoded body.
    pub content: String,
    /// Media type reported by the server, or inferred from the file extension.
    pub media_type: Option<String>,
}

/// Anything that can turn a URL into document text.
pub trait Loader {
    /// Loads the document at `location`, negotiating with `accept` where the
    /// transport supports it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::NotFound`] if nothing exists at `location`,
    /// and another variant for any other failure.
    fn load(&self, location: &Url, accept: &str) -> Result<Fetched>;
}

/// Returns the working directory as a directory URL.
///
/// # Errors
///
/// Returns an error if the working directory cannot be determined.
pub fn working_directory() -> Result<Url> {
    let cwd = std::env::current_dir().map_err(|e| ValidatorError::InvalidSource {
        reference: ".".to_string(),
        reason: e.to_string(),
    })?;
    Url::from_directory_path(&cwd).map_err(|()| ValidatorError::InvalidSource {
        reference: cwd.display().to_string(),
        reason: "working directory is not an absolute path".to_string(),
    })
}

/// Resolves `reference` (absolute URL, absolute path, or relative reference)
/// against `base`.
///
/// # Errors
///
/// Returns [`ValidatorError::InvalidSource`] if the reference cannot be
/// parsed as a URL reference.
pub fn resolve(reference: &str, base: &Url) -> Result<Url> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(ValidatorError::InvalidSource {
            reference: reference.to_string(),
            reason: "empty reference".to_string(),
        });
    }
    base.join(reference)
        .map_err(|e| ValidatorError::InvalidSource {
            reference: reference.to_string(),
            reason: e.to_string(),
        })
}

/// Loads documents from the local filesystem and over HTTP.
#[derive(Debug)]
pub struct Fetcher {
    client: Client,
    retries: u32,
    backoff: Duration,
}

impl Fetcher {
    /// Builds a fetcher with the timeout and retry policy from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &ValidatorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(concat!("component-validator/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ValidatorError::Client)?;
        Ok(Self {
            client,
            retries: config.retries,
            backoff: config.retry_backoff,
        })
    }

    fn load_file(location: &Url) -> Result<Fetched> {
        let path = location
            .to_file_path()
            .map_err(|()| ValidatorError::InvalidSource {
                reference: location.to_string(),
                reason: "not a local file path".to_string(),
            })?;
        let content = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ValidatorError::NotFound(path.display().to_string())
            } else {
                ValidatorError::Io {
                    location: path.display().to_string(),
                    source,
                }
            }
        })?;
        let media_type = match path.extension().and_then(|e| e.to_str()) {
            Some("ttl") | Some("n3") => Some("text/turtle".to_string()),
            Some("rdf") | Some("owl") => Some("application/rdf+xml".to_string()),
            _ => None,
        };
        Ok(Fetched {
            location: location.clone(),
            content,
            media_type,
        })
    }

    fn load_http_once(&self, location: &Url, accept: &str) -> Result<Fetched> {
        let fetch_error = |source| ValidatorError::Fetch {
            location: location.to_string(),
            source,
        };
        let response = self
            .client
            .get(location.clone())
            .header(ACCEPT, accept)
            .send()
            .map_err(fetch_error)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Err(ValidatorError::NotFound(location.to_string()));
        }
        if !status.is_success() {
            return Err(ValidatorError::HttpStatus {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }
        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(|value| value.trim().to_ascii_lowercase());
        let content = response.text().map_err(fetch_error)?;
        Ok(Fetched {
            location: location.clone(),
            content,
            media_type,
        })
    }

    fn load_http(&self, location: &Url, accept: &str) -> Result<Fetched> {
        let mut delay = self.backoff;
        let mut attempt = 0;
        loop {
            match self.load_http_once(location, accept) {
                Err(err) if attempt < self.retries && err.is_transient() => {
                    attempt += 1;
                    warn!(%location, attempt, error = %err, "transient fetch failure, retrying");
                    thread::sleep(delay);
                    delay = delay.saturating_mul(2);
                }
                result => return result,
            }
        }
    }
}

impl Loader for Fetcher {
    fn load(&self, location: &Url, accept: &str) -> Result<Fetched> {
        debug!(%location, "loading");
        match location.scheme() {
            "file" => Self::load_file(location),
            "http" | "https" => self.load_http(location, accept),
            other => Err(ValidatorError::InvalidSource {
                reference: location.to_string(),
                reason: format!("unsupported scheme `{other}`"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use std::io::{Read, Write};
    use std::net::TcpListener;

    use super::*;

    const UNAVAILABLE: &str =
        "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
    const BODY: &str = "<http://example.org/Fasta> a <http://example.org/Format> .";

    fn fetcher() -> Fetcher {
        Fetcher::new(&ValidatorConfig::default()).expect("client")
    }

    fn retrying(retries: u32) -> Fetcher {
        let config = ValidatorConfig::default().with_retries(retries, Duration::from_millis(1));
        Fetcher::new(&config).expect("client")
    }

    fn ok(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/turtle; charset=utf-8\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    /// Answers one connection per response, in order, and returns how many
    /// requests were served.
    fn serve(responses: Vec<String>) -> (Url, thread::JoinHandle<usize>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = Url::parse(&format!("http://{}/formats.ttl", listener.local_addr().unwrap())).unwrap();
        let handle = thread::spawn(move || {
            let mut served = 0;
            for response in responses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                stream.write_all(response.as_bytes()).unwrap();
                served += 1;
            }
            served
        });
        (url, handle)
    }

    #[test]
    fn relative_reference_resolves_against_base() {
        let base = Url::parse("file:///work/profiles/").unwrap();
        let url = resolve("../components/c.t2flow", &base).unwrap();
        assert_eq!(url.as_str(), "file:///work/components/c.t2flow");
    }

    #[test]
    fn absolute_reference_ignores_base() {
        let base = Url::parse("file:///work/").unwrap();
        let url = resolve("http://example.org/profile.xml", &base).unwrap();
        assert_eq!(url.as_str(), "http://example.org/profile.xml");
    }

    #[test]
    fn empty_reference_is_rejected() {
        let base = Url::parse("file:///work/").unwrap();
        assert!(matches!(
            resolve("  ", &base),
            Err(ValidatorError::InvalidSource { .. })
        ));
    }

    #[test]
    fn reads_local_files_with_inferred_media_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("onto.ttl");
        std::fs::write(&path, "@prefix ex: <http://example.org/> .").unwrap();
        let url = Url::from_file_path(&path).unwrap();
        let fetched = fetcher().load(&url, RDF_ACCEPT).unwrap();
        assert!(fetched.content.starts_with("@prefix"));
        assert_eq!(fetched.media_type.as_deref(), Some("text/turtle"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let url = Url::from_file_path(dir.path().join("absent.xml")).unwrap();
        let err = fetcher().load(&url, XML_ACCEPT).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn unsupported_scheme_is_rejected() {
        let url = Url::parse("ftp://example.org/profile.xml").unwrap();
        assert!(matches!(
            fetcher().load(&url, XML_ACCEPT),
            Err(ValidatorError::InvalidSource { .. })
        ));
    }

    #[test]
    fn server_error_is_retried_until_success() {
        let (url, server) = serve(vec![UNAVAILABLE.to_string(), ok(BODY)]);
        let fetched = retrying(1).load(&url, RDF_ACCEPT).unwrap();
        assert_eq!(fetched.content, BODY);
        assert_eq!(fetched.media_type.as_deref(), Some("text/turtle"));
        assert_eq!(server.join().unwrap(), 2);
    }

    #[test]
    fn server_error_without_retries_is_reported() {
        let (url, server) = serve(vec![UNAVAILABLE.to_string()]);
        let err = retrying(0).load(&url, RDF_ACCEPT).unwrap_err();
        assert!(matches!(err, ValidatorError::HttpStatus { status: 503, .. }));
        assert!(err.is_transient());
        assert_eq!(server.join().unwrap(), 1);
    }

    #[test]
    fn missing_remote_document_is_not_retried() {
        let not_found =
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
        let (url, server) = serve(vec![not_found.to_string()]);
        let err = retrying(3).load(&url, XML_ACCEPT).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(server.join().unwrap(), 1);
    }
}
