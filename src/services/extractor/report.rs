use std::fmt::Write;
use std::path::PathBuf;

/// What happened to one selected archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Extracted,
    /// Destination already existed and force was off.
    Skipped,
    /// The archive has no such entry.
    NotFound,
    /// Reading or writing failed; the message says why.
    Failed(String),
}

impl ExtractionOutcome {
    fn status(&self) -> String {
        match self {
            ExtractionOutcome::Extracted => "extracted.".to_string(),
            ExtractionOutcome::Skipped => "skipped.".to_string(),
            ExtractionOutcome::NotFound => "not found!".to_string(),
            ExtractionOutcome::Failed(msg) => format!("failed ({msg})."),
        }
    }
}

/// Counters for one bulk rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkTally {
    pub label: String,
    pub found: usize,
    pub extracted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BulkTally {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &ExtractionOutcome) {
        self.found += 1;
        match outcome {
            ExtractionOutcome::Extracted => self.extracted += 1,
            ExtractionOutcome::Skipped => self.skipped += 1,
            ExtractionOutcome::NotFound | ExtractionOutcome::Failed(_) => self.failed += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedOutcome {
    pub destination: PathBuf,
    pub outcome: ExtractionOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub bulk: Vec<BulkTally>,
    pub named: Vec<NamedOutcome>,
}

impl ExtractionReport {
    /// True when at least one entry could not be written.
    pub fn has_failures(&self) -> bool {
        self.bulk.iter().any(|t| t.failed > 0)
            || self
                .named
                .iter()
                .any(|n| matches!(n.outcome, ExtractionOutcome::Failed(_)))
    }

    /// Human-readable run summary, one section per bulk rule followed by
    /// the named files.
    pub fn render_summary(&self) -> String {
        let mut out = String::new();

        for tally in &self.bulk {
            let _ = writeln!(out, "Extracting {}:", tally.label);
            let _ = writeln!(out, " - Found {} {}.", tally.found, tally.label);
            let _ = writeln!(out, " - Extracted {}.", tally.extracted);
            let _ = writeln!(
                out,
                " - Skipped {} (Use -f to force overwrite).",
                tally.skipped
            );
            if tally.failed > 0 {
                let _ = writeln!(out, " - Failed {}.", tally.failed);
            }
            out.push('\n');
        }

        if !self.named.is_empty() {
            out.push_str("Extracting other textures:\n");
            for named in &self.named {
                let _ = writeln!(
                    out,
                    " - Extracting {} ... {}",
                    named.destination.display(),
                    named.outcome.status()
                );
            }
        }

        out
    }
}
