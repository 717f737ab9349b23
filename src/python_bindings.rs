use pyo3::exceptions::PyNotImplementedError;
use pyo3::prelude::*;

use crate::{Error, Segment, Templater, TemplaterConfig};

#[pyclass]
struct PyTemplater {
    inner: Templater,
}

#[pymethods]
impl PyTemplater {
    #[new]
    #[pyo3(signature = (min_block_size=1, marker="|||"))]
    fn new(min_block_size: usize, marker: &str) -> Self {
        let config = TemplaterConfig {
            min_block_size,
            marker: marker.to_string(),
        };
        PyTemplater { inner: Templater::new(config) }
    }

    fn learn(&mut self, text: &str) -> PyResult<()> {
        self.inner.learn(text).map_err(|e| match e {
            Error::Unsupported(msg) => PyNotImplementedError::new_err(msg),
        })
    }

    /// Literal text, or `None` for each wildcard.
    fn segments(&self) -> Option<Vec<Option<String>>> {
        self.inner.template().map(|t| {
            t.segments()
                .iter()
                .map(|seg| match seg {
                    Segment::Literal(s) => Some(s.clone()),
                    Segment::Wildcard => None,
                })
                .collect()
        })
    }

    fn render(&self) -> Option<String> {
        self.inner.render()
    }

    fn finalize(&mut self) {
        self.inner.finalize();
    }
}

#[pymodule]
fn templater_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyTemplater>()?;
    Ok(())
}
