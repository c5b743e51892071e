//! Request DTOs for the service layer

/// One candidate file, fully read at the upload boundary
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub original_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl IncomingFile {
    #[inline]
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// An incoming submission: raw text plus candidate files in request order
#[derive(Debug, Clone, Default)]
pub struct NewSubmission {
    pub text: String,
    pub files: Vec<IncomingFile>,
}

/// Best-effort request provenance
#[derive(Debug, Clone)]
pub struct ClientMeta {
    pub ip: String,
    pub agent: String,
}

impl Default for ClientMeta {
    fn default() -> Self {
        Self {
            ip: "unknown".to_string(),
            agent: "unknown".to_string(),
        }
    }
}
