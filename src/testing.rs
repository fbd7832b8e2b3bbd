//! Test doubles shared by the unit tests.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    io::{self, Cursor, Write},
};

use zip::{ZipWriter, write::SimpleFileOptions};

use crate::{
    package::{
        errors::TransportError,
        transport::{Fetch, Response},
    },
    prompt::Prompt,
};

/// Answers prompts from a fixed script and records what was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
    secrets: usize,
}

impl ScriptedPrompt {
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> ScriptedPrompt {
        ScriptedPrompt {
            answers: answers.into_iter().map(Into::into).collect(),
            ..ScriptedPrompt::default()
        }
    }

    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn secrets_asked(&self) -> usize {
        self.secrets
    }

    fn next(&mut self, message: &str) -> io::Result<String> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

impl Prompt for ScriptedPrompt {
    fn line(&mut self, message: &str) -> io::Result<String> {
        self.next(message)
    }

    fn secret(&mut self, message: &str) -> io::Result<String> {
        self.secrets += 1;
        self.next(message)
    }
}

/// Serves canned responses; any other URL gets a 404.
#[derive(Debug, Default)]
pub struct StaticFetch {
    responses: HashMap<String, (u16, Vec<u8>)>,
    requested: RefCell<Vec<String>>,
}

impl StaticFetch {
    pub fn with(mut self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> StaticFetch {
        self.responses.insert(url.to_string(), (status, body.into()));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetch for StaticFetch {
    fn get(&self, url: &str) -> Result<Response, TransportError> {
        self.requested.borrow_mut().push(url.to_string());
        let (status, body) = self
            .responses
            .get(url)
            .cloned()
            .unwrap_or((404, Vec::new()));
        Ok(Response { status, body })
    }
}

/// Builds a zip archive in memory from `(name, contents)` pairs.
pub fn zip_archive(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in files {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Wraps package entries in an index document.
pub fn index_document(entries: &[&str]) -> String {
    format!(
        "<?xml version=\"1.0\"?>\n<snarf>\n{}\n</snarf>\n",
        entries.join("\n")
    )
}

/// One well-formed package entry under `root`.
pub fn package_entry(root: &str, name: &str, category: &str, description: &str) -> String {
    format!(
        "<package name=\"{name}\" category=\"{category}\">\n\
         <description>{description}</description>\n\
         <entry url=\"{root}/{name}.zip\"/>\n\
         </package>"
    )
}
