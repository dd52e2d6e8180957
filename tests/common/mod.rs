use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use reportview_core::{FetchResponse, FileFetcher, ResolveResult};

/// Scripted stand-in for the local file server.
#[derive(Default)]
pub struct ScriptedServer {
    responses: HashMap<String, (u16, Vec<u8>)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(mut self, path: &str, status: u16, body: &[u8]) -> Self {
        self.responses
            .insert(path.to_string(), (status, body.to_vec()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl FileFetcher for ScriptedServer {
    async fn fetch(&self, path: &str) -> ResolveResult<FetchResponse> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(path.to_string());

        match self.responses.get(path) {
            Some((status, body)) => Ok(FetchResponse::new(*status, body.clone())),
            None => Ok(FetchResponse::new(404, Vec::new())),
        }
    }
}

/// Build a minimal valid ZIP in memory.
pub fn zip_bytes(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in files {
        writer.start_file(entry_name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}
