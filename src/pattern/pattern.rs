// Tue Aug 25 2026 - Dan

/// A named reference byte sequence. The buffer is fixed at creation and
/// owned for the pattern's whole lifetime.
pub struct Pattern<B: AsRef<[u8]>> {
    name: String,
    data: B,
}

impl<B: AsRef<[u8]>> Pattern<B> {
    pub fn new(name: &str, data: B) -> Self {
        Self {
            name: name.to_string(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        self.data.as_ref()
    }

    pub fn len(&self) -> usize {
        self.data.as_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_empty()
    }
}
