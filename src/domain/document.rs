use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub declared_type: DeclaredType,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// How the raw bytes of an input are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    Tabular,
    PlainText,
    BinaryDocument,
}

impl DeclaredType {
    /// Parameters such as `; charset=utf-8` are ignored.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "text/csv" | "application/csv" => Some(Self::Tabular),
            "text/plain" => Some(Self::PlainText),
            "application/pdf" => Some(Self::BinaryDocument),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".csv") {
            Some(Self::Tabular)
        } else if lower.ends_with(".txt") {
            Some(Self::PlainText)
        } else if lower.ends_with(".pdf") {
            Some(Self::BinaryDocument)
        } else {
            None
        }
    }

    /// Tabular wins when either the MIME type or the extension says so, then binary
    /// documents, then plain text.
    pub fn resolve(mime: Option<&str>, filename: &str) -> Option<Self> {
        let by_mime = mime.and_then(Self::from_mime);
        let by_name = Self::from_filename(filename);

        [Self::Tabular, Self::BinaryDocument, Self::PlainText]
            .into_iter()
            .find(|candidate| by_mime == Some(*candidate) || by_name == Some(*candidate))
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Tabular => "text/csv",
            Self::PlainText => "text/plain",
            Self::BinaryDocument => "application/pdf",
        }
    }
}

impl Document {
    pub fn new(filename: String, declared_type: DeclaredType, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            declared_type,
            size_bytes,
        }
    }
}
