/// Separator placed between literals when a template is flattened back into
/// text for alignment. Keeps two neighbouring literals from fusing into one
/// matchable run.
pub const SEPARATOR: &str = "\0\0\0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// Content that differed between the aligned samples. Carries no text.
    Wildcard,
}

impl Segment {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Segment::Literal(s) => Some(s),
            Segment::Wildcard => None,
        }
    }
}

/// Ordered sequence of literal blocks and wildcard gaps shared by every
/// sample learned so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Literal texts in template order.
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::as_literal)
    }

    pub fn wildcard_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_wildcard()).count()
    }

    /// Flatten into the character sequence the next sample is aligned against:
    /// literals joined by [`SEPARATOR`]. A wildcard at either end of the
    /// template is written as a [`SEPARATOR`] too, so the region there is never
    /// empty on the template side and the gap survives the next alignment.
    pub fn serialize_for_alignment(&self) -> Vec<char> {
        let mut out = Vec::new();
        if self.segments.first().is_some_and(Segment::is_wildcard) {
            out.extend(SEPARATOR.chars());
        }
        let mut any_literal = false;
        for (i, lit) in self.literals().enumerate() {
            if i > 0 {
                out.extend(SEPARATOR.chars());
            }
            out.extend(lit.chars());
            any_literal = true;
        }
        // a lone wildcard is already covered by the leading separator
        if any_literal && self.segments.last().is_some_and(Segment::is_wildcard) {
            out.extend(SEPARATOR.chars());
        }
        out
    }
}

impl From<Vec<Segment>> for Template {
    fn from(segments: Vec<Segment>) -> Self {
        Template { segments }
    }
}

/// Anything that can be rendered as literal text with wildcards substituted.
pub trait Render {
    fn segments(&self) -> &[Segment];

    /// Render into a `String`, calling `replacer` with the zero-based index of
    /// every `Wildcard` segment.
    fn render_with<F>(&self, mut replacer: F) -> String
    where
        F: FnMut(usize) -> String,
    {
        let mut s = String::new();
        let mut wildcard_idx = 0usize;
        for seg in self.segments() {
            match seg {
                Segment::Literal(l) => s.push_str(l),
                Segment::Wildcard => {
                    s.push_str(&replacer(wildcard_idx));
                    wildcard_idx += 1;
                }
            }
        }
        s
    }

    /// Convenience to render with a static marker for every `Wildcard`.
    fn render_with_static(&self, marker: &str) -> String {
        self.render_with(|_| marker.to_string())
    }
}

impl Render for Template {
    fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Configuration for [`crate::Templater`].
#[derive(Debug, Clone)]
pub struct TemplaterConfig {
    /// Shortest common run kept as a literal; shorter runs fold into a wildcard.
    pub min_block_size: usize,
    /// Token substituted for each wildcard when rendering.
    pub marker: String,
}

impl TemplaterConfig {
    /// `min_block_size` with zero clamped to one: an empty run never anchors.
    pub fn effective_min_block_size(&self) -> usize {
        self.min_block_size.max(1)
    }
}

impl Default for TemplaterConfig {
    fn default() -> Self {
        TemplaterConfig {
            min_block_size: 1,
            marker: "|||".to_string(),
        }
    }
}
