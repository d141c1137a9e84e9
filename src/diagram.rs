use indexmap::IndexSet;

#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub name: String,
    entities: IndexSet<String>,
    interactions: Vec<Interaction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub source: String,
    pub target: String,
    pub label: String,
    pub note: Option<String>,
    pub result: Option<String>,
}

impl Interaction {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
            note: None,
            result: None,
        }
    }

    /// Empty strings count as no note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = non_empty(note.into());
        self
    }

    /// Empty strings count as no result.
    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = non_empty(result.into());
        self
    }

    /// Text shown on the call line: the label, followed by `: note` if present.
    pub fn call_text(&self) -> String {
        match &self.note {
            Some(note) => format!("{}: {note}", self.label),
            None => self.label.clone(),
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

impl Diagram {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: IndexSet::new(),
            interactions: Vec::new(),
        }
    }

    /// Appends `name` unless it is already present; the first index sticks.
    pub fn add_entity(&mut self, name: impl Into<String>) {
        self.entities.insert(name.into());
    }

    /// Appends unconditionally. Unknown entity names are reported when the
    /// layout is computed.
    pub fn add_interaction(&mut self, interaction: Interaction) {
        self.interactions.push(interaction);
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entities.get_index_of(name)
    }

    pub fn entities(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entities.iter().map(String::as_str)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
