//! Prompter implementations.
//!
//! The core pipeline only sees the `Prompter` trait; this module supplies
//! the real stdin exchange and a file-backed memoizing wrapper. The cache
//! is a convenience, never authoritative: any cache I/O failure degrades to
//! a plain pass-through prompt.

use crate::correct::Prompter;
use serde_json::{Map, Value as Json};
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Directory holding persisted prompt state, relative to the project root.
pub const STATE_DIR: &str = ".tsaudit";

/// Blocking operator exchange over stderr/stdin.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn prompt(&mut self, question: &str, _id: &str) -> String {
        eprint!("{} ", question);
        let _ = std::io::stderr().flush();
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
            Err(_) => String::new(),
        }
    }
}

/// Memoizing wrapper: answers keyed by prompt id in
/// `.tsaudit/answers.json`, with asked questions appended to
/// `.tsaudit/questions.txt`. Cache hits bypass the inner prompter.
pub struct CachedPrompter<P: Prompter> {
    inner: P,
    answers_path: PathBuf,
    questions_path: PathBuf,
    answers: Map<String, Json>,
}

impl<P: Prompter> CachedPrompter<P> {
    pub fn new(root: &std::path::Path, inner: P) -> Self {
        let dir = root.join(STATE_DIR);
        let answers_path = dir.join("answers.json");
        let questions_path = dir.join("questions.txt");
        let answers = fs::read_to_string(&answers_path)
            .ok()
            .and_then(|s| serde_json::from_str::<Json>(&s).ok())
            .and_then(|v| match v {
                Json::Object(m) => Some(m),
                _ => None,
            })
            .unwrap_or_default();
        CachedPrompter {
            inner,
            answers_path,
            questions_path,
            answers,
        }
    }

    fn persist(&self) {
        if let Some(dir) = self.answers_path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        if let Ok(s) = serde_json::to_string_pretty(&Json::Object(self.answers.clone())) {
            let _ = fs::write(&self.answers_path, s);
        }
    }

    fn log_question(&self, question: &str) {
        if let Some(dir) = self.questions_path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        if let Ok(mut f) = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.questions_path)
        {
            let _ = writeln!(f, "{}", question);
        }
    }
}

impl<P: Prompter> Prompter for CachedPrompter<P> {
    fn prompt(&mut self, question: &str, id: &str) -> String {
        if let Some(Json::String(cached)) = self.answers.get(id) {
            return cached.clone();
        }
        self.log_question(question);
        let answer = self.inner.prompt(question, id);
        self.answers
            .insert(id.to_string(), Json::String(answer.clone()));
        self.persist();
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correct::ScriptedPrompter;
    use tempfile::tempdir;

    #[test]
    fn test_answers_are_memoized_across_instances() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        let mut first = CachedPrompter::new(root, ScriptedPrompter::new(["yes"]));
        assert_eq!(first.prompt("Correct 'x'?", "x"), "yes");

        // A fresh instance with an empty script must hit the cache.
        let mut second = CachedPrompter::new(root, ScriptedPrompter::new(Vec::<String>::new()));
        assert_eq!(second.prompt("Correct 'x'?", "x"), "yes");

        let log = fs::read_to_string(root.join(STATE_DIR).join("questions.txt")).unwrap();
        assert_eq!(log.lines().count(), 1);
    }

    #[test]
    fn test_distinct_ids_prompt_separately() {
        let dir = tempdir().unwrap();
        let mut p = CachedPrompter::new(dir.path(), ScriptedPrompter::new(["a", "b"]));
        assert_eq!(p.prompt("q1", "id1"), "a");
        assert_eq!(p.prompt("q2", "id2"), "b");
        assert_eq!(p.prompt("q1 again", "id1"), "a");
    }
}
