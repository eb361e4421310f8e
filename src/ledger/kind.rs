/// Represents which cleaning purpose a file was processed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProcessingKind {
    WebScraping,
    PhoneNumbers,
}

impl ProcessingKind {
    /// All kinds, in the fixed order used everywhere (ledger compaction,
    /// KindSet iteration, menu numbering).
    pub const ALL: [ProcessingKind; 2] = [ProcessingKind::WebScraping, ProcessingKind::PhoneNumbers];

    fn bit(self) -> u8 {
        match self {
            ProcessingKind::WebScraping => 0b01,
            ProcessingKind::PhoneNumbers => 0b10,
        }
    }

    /// The literal label written to the ledger file.
    pub fn label(self) -> &'static str {
        match self {
            ProcessingKind::WebScraping => "Processed for Web Scraping",
            ProcessingKind::PhoneNumbers => "Processed for Phone Numbers",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Processed for Web Scraping" => Some(ProcessingKind::WebScraping),
            "Processed for Phone Numbers" => Some(ProcessingKind::PhoneNumbers),
            _ => None,
        }
    }

    /// Human-readable name used in skip messages.
    pub fn describe(self) -> &'static str {
        match self {
            ProcessingKind::WebScraping => "web scraping",
            ProcessingKind::PhoneNumbers => "phone numbers",
        }
    }

    /// Output subdirectory under the cleaned-data root.
    pub fn subdir(self) -> &'static str {
        match self {
            ProcessingKind::WebScraping => "for_web_data",
            ProcessingKind::PhoneNumbers => "for_phone_numbers",
        }
    }

    /// Prefix prepended to the source filename for the output file.
    pub fn prefix(self) -> &'static str {
        match self {
            ProcessingKind::WebScraping => "clean_web_",
            ProcessingKind::PhoneNumbers => "clean_phone_",
        }
    }
}

/// Set of processing kinds completed for one file, as a bitmask.
/// Iteration order is fixed: WebScraping, then PhoneNumbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KindSet(u8);

impl KindSet {
    pub fn insert(&mut self, kind: ProcessingKind) {
        self.0 |= kind.bit();
    }

    pub fn contains(&self, kind: ProcessingKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True once every kind has been completed for the file.
    pub fn is_complete(&self) -> bool {
        self.len() == ProcessingKind::ALL.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ProcessingKind> + '_ {
        ProcessingKind::ALL.into_iter().filter(|k| self.contains(*k))
    }
}
