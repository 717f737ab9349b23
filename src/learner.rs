use crate::builder::align;
use crate::core::{Render, Segment, Template, TemplaterConfig};
use crate::error::{Error, Result};

/// Incremental template learner.
///
/// Each call to [`Templater::learn`] aligns the new sample against the current
/// template and replaces the template with the result, so literal blocks that
/// stop recurring shrink or turn into wildcards while blocks that keep
/// recurring survive.
///
/// Cost per sample is proportional to the sample length times the length of
/// the flattened template in the worst case, repeated on the shrinking regions
/// around each anchor. Large or highly dissimilar corpora hit this limit.
#[derive(Debug, Clone, Default)]
pub struct Templater {
    template: Option<Template>,
    config: TemplaterConfig,
    finalized: bool,
    samples_learned: usize,
}

impl Templater {
    pub fn new(config: TemplaterConfig) -> Templater {
        Templater {
            template: None,
            config,
            finalized: false,
            samples_learned: 0,
        }
    }

    /// Start from an existing template instead of from nothing.
    ///
    /// Literals shorter than the configured `min_block_size` are turned into
    /// wildcards, and wildcards that end up next to each other are merged.
    pub fn with_template(template: Template, config: TemplaterConfig) -> Templater {
        let template = fit_to_block_size(template, config.effective_min_block_size());
        Templater {
            template: Some(template),
            ..Templater::new(config)
        }
    }

    pub fn config(&self) -> &TemplaterConfig {
        &self.config
    }

    /// Current template, or `None` before anything has been learned.
    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    pub fn samples_learned(&self) -> usize {
        self.samples_learned
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Freeze the template. Any later `learn` fails with [`Error::Unsupported`].
    pub fn finalize(&mut self) {
        self.finalized = true;
    }

    /// Render the current template with the configured marker in place of
    /// each wildcard.
    pub fn render(&self) -> Option<String> {
        self.template
            .as_ref()
            .map(|t| t.render_with_static(&self.config.marker))
    }

    /// Fold `sample` into the template.
    pub fn learn(&mut self, sample: &str) -> Result<()> {
        if self.finalized {
            return Err(Error::Unsupported(
                "cannot learn into a finalized template".to_string(),
            ));
        }

        let min_block_size = self.config.effective_min_block_size();
        let sample: Vec<char> = sample.chars().collect();
        let next = match &self.template {
            None => bootstrap(&sample, min_block_size),
            Some(current) => {
                let flat = current.serialize_for_alignment();
                let segments = align(&sample, &flat, min_block_size);
                if segments.is_empty() {
                    vec![Segment::Wildcard]
                } else {
                    segments
                }
            }
        };

        let next = Template::from(next);
        tracing::debug!(
            sample_chars = sample.len(),
            segments = next.len(),
            wildcards = next.wildcard_count(),
            "learned sample"
        );
        self.template = Some(next);
        self.samples_learned += 1;
        Ok(())
    }

    /// Learn from raw bytes. Invalid UTF-8 is replaced with U+FFFD rather
    /// than rejected.
    pub fn learn_bytes(&mut self, sample: &[u8]) -> Result<()> {
        self.learn(&String::from_utf8_lossy(sample))
    }

    /// Learn every sample in order, stopping at the first failure.
    pub fn learn_all<I, S>(&mut self, samples: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for sample in samples {
            self.learn(sample.as_ref())?;
        }
        Ok(())
    }
}

// First sample: the whole text is the template. Aligning a text against
// itself gives the same single literal, so it is stored directly. Text that
// could never form a literal becomes one wildcard.
fn bootstrap(sample: &[char], min_block_size: usize) -> Vec<Segment> {
    if sample.is_empty() || sample.len() < min_block_size {
        vec![Segment::Wildcard]
    } else {
        vec![Segment::Literal(sample.iter().collect())]
    }
}

fn fit_to_block_size(template: Template, min_block_size: usize) -> Template {
    let mut out: Vec<Segment> = Vec::with_capacity(template.len());
    for seg in template.into_segments() {
        let seg = match seg {
            Segment::Literal(s) if s.chars().count() < min_block_size => Segment::Wildcard,
            other => other,
        };
        if seg.is_wildcard() && out.last().is_some_and(Segment::is_wildcard) {
            continue;
        }
        out.push(seg);
    }
    Template::from(out)
}
